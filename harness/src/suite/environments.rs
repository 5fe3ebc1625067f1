use super::{block_step, run_step};
use crate::report::StepRecord;
use client::{
    EnvironmentFilter, EnvironmentRiskLink, EnvironmentUpdate, LocationType, MappingApi,
    NewEnvironment, RiskFilter,
};
use tracing::debug;

const ALL_STEPS: [&str; 8] = [
    "GET /environments",
    "GET /environments?companyId",
    "GET /environments/:id",
    "POST /environments",
    "PATCH /environments/:id",
    "POST /environments/:id/risks",
    "GET /environments/:id/risks",
    "DELETE /environments/:id",
];

/// Environments group: list → filtered list → get-by-id → create → update →
/// add-risk → list-risks → delete. The whole group is blocked when no
/// company exists to own the created environment.
pub async fn run(api: &dyn MappingApi) -> Vec<StepRecord> {
    let mut records = Vec::new();

    let company_id = match api.list_companies().await {
        Ok(companies) => companies.first().map(|c| c.id.clone()),
        Err(err) => {
            debug!("company prerequisite lookup failed: {}", err);
            None
        }
    };

    let Some(company_id) = company_id else {
        for name in ALL_STEPS {
            block_step(&mut records, name, "no company available");
        }
        return records;
    };

    let risk_id = match api.list_risks(&RiskFilter::default()).await {
        Ok(risks) => risks.first().map(|r| r.id.clone()),
        Err(err) => {
            debug!("risk prerequisite lookup failed: {}", err);
            None
        }
    };

    let environments = run_step(
        &mut records,
        "GET /environments",
        api.list_environments(&EnvironmentFilter::default()),
        |environments| format!("found {} environments", environments.len()),
    )
    .await;

    let Some(environments) = environments else {
        for name in &ALL_STEPS[1..] {
            block_step(&mut records, name, "initial environment list failed");
        }
        return records;
    };

    run_step(
        &mut records,
        "GET /environments?companyId",
        api.list_environments(&EnvironmentFilter::by_company(&company_id)),
        |environments| format!("found {} company environments", environments.len()),
    )
    .await;

    match environments.first() {
        Some(environment) => {
            run_step(
                &mut records,
                "GET /environments/:id",
                api.get_environment(&environment.id),
                |environment| format!("retrieved: {}", environment.name),
            )
            .await;
        }
        None => block_step(
            &mut records,
            "GET /environments/:id",
            "no seeded environment available",
        ),
    }

    let payload = NewEnvironment::new(
        &company_id,
        "Ambiente de Teste",
        LocationType::EmployerEstablishment,
    )
    .with_registered_in_e_social(false);
    let created = run_step(
        &mut records,
        "POST /environments",
        api.create_environment(&payload),
        |environment| format!("created: {}", environment.id),
    )
    .await;

    let Some(environment) = created else {
        for name in &ALL_STEPS[4..] {
            block_step(&mut records, name, "create step did not produce an id");
        }
        return records;
    };

    run_step(
        &mut records,
        "PATCH /environments/:id",
        api.update_environment(
            &environment.id,
            &EnvironmentUpdate::default().description("Ambiente atualizado via teste"),
        ),
        |_| "updated successfully".to_string(),
    )
    .await;

    match &risk_id {
        Some(risk_id) => {
            run_step(
                &mut records,
                "POST /environments/:id/risks",
                api.add_environment_risk(&environment.id, &EnvironmentRiskLink::new(risk_id)),
                |_| "risk added to environment".to_string(),
            )
            .await;
        }
        None => block_step(
            &mut records,
            "POST /environments/:id/risks",
            "no risk available",
        ),
    }

    run_step(
        &mut records,
        "GET /environments/:id/risks",
        api.list_environment_risks(&environment.id),
        |risks| format!("found {} risks", risks.len()),
    )
    .await;

    run_step(
        &mut records,
        "DELETE /environments/:id",
        api.delete_environment(&environment.id),
        |_| "deleted successfully".to_string(),
    )
    .await;

    records
}
