use super::{block_step, run_step};
use crate::report::StepRecord;
use client::{MappingApi, NewRisk, RiskFilter, RiskType};
use tracing::debug;

const DEPENDENT_STEPS: [&str; 4] = [
    "GET /risks?type=PHYSICAL",
    "GET /risks/:id",
    "POST /risks",
    "DELETE /risks/:id",
];

/// Risks group: list → filtered list → get-by-id → create → delete.
/// Creation needs a category id from a fresh category list.
pub async fn run(api: &dyn MappingApi) -> Vec<StepRecord> {
    let mut records = Vec::new();

    // Prerequisite lookup, not a scored step.
    let category_id = match api.list_risk_categories().await {
        Ok(categories) => categories.first().map(|c| c.id.clone()),
        Err(err) => {
            debug!("category prerequisite lookup failed: {}", err);
            None
        }
    };

    let risks = run_step(&mut records, "GET /risks", api.list_risks(&RiskFilter::default()), |risks| {
        format!("found {} risks", risks.len())
    })
    .await;

    let Some(risks) = risks else {
        for name in DEPENDENT_STEPS {
            block_step(&mut records, name, "initial risk list failed");
        }
        return records;
    };

    run_step(
        &mut records,
        "GET /risks?type=PHYSICAL",
        api.list_risks(&RiskFilter::by_type(RiskType::Physical)),
        |risks| format!("found {} physical risks", risks.len()),
    )
    .await;

    match risks.first() {
        Some(risk) => {
            run_step(&mut records, "GET /risks/:id", api.get_risk(&risk.id), |risk| {
                format!("retrieved: {}", risk.name)
            })
            .await;
        }
        None => block_step(&mut records, "GET /risks/:id", "no seeded risk available"),
    }

    let Some(category_id) = category_id else {
        block_step(&mut records, "POST /risks", "no risk category available");
        block_step(&mut records, "DELETE /risks/:id", "no risk category available");
        return records;
    };

    let payload = NewRisk::new(&category_id, RiskType::Physical, "Risco de Teste")
        .with_code("99.99.999")
        .with_allows_intensity(true);
    let created = run_step(&mut records, "POST /risks", api.create_risk(&payload), |risk| {
        format!("created: {}", risk.id)
    })
    .await;

    match created {
        Some(risk) => {
            run_step(
                &mut records,
                "DELETE /risks/:id",
                api.delete_risk(&risk.id),
                |_| "soft deleted successfully".to_string(),
            )
            .await;
        }
        None => block_step(
            &mut records,
            "DELETE /risks/:id",
            "create step did not produce an id",
        ),
    }

    records
}
