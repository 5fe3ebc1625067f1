use super::{block_step, run_step};
use crate::report::StepRecord;
use client::{
    EnvironmentFilter, JobEnvironmentLink, JobNotesUpdate, JobRiskLink, JobUpdate, MappingApi,
    NewJob, NewJobExam, RiskFilter,
};
use tracing::debug;

const DEPENDENT_STEPS: [&str; 12] = [
    "POST /jobs",
    "GET /jobs/:id",
    "PATCH /jobs/:id",
    "PATCH /jobs/:id/notes",
    "GET /jobs/:id/notes",
    "POST /jobs/:id/environments",
    "GET /jobs/:id/environments",
    "POST /jobs/:id/risks",
    "GET /jobs/:id/risks",
    "POST /jobs/:id/exams",
    "GET /jobs/:id/exams",
    "DELETE /jobs/:id",
];

/// Job Mapping group, thirteen steps from list through delete. Everything
/// after create depends on the created job id; environment and risk link
/// steps further depend on their own prerequisite lookups.
pub async fn run(api: &dyn MappingApi) -> Vec<StepRecord> {
    let mut records = Vec::new();

    let company_id = match api.list_companies().await {
        Ok(companies) => companies.first().map(|c| c.id.clone()),
        Err(err) => {
            debug!("company prerequisite lookup failed: {}", err);
            None
        }
    };
    let environment_id = match api.list_environments(&EnvironmentFilter::default()).await {
        Ok(environments) => environments.first().map(|e| e.id.clone()),
        Err(err) => {
            debug!("environment prerequisite lookup failed: {}", err);
            None
        }
    };
    let risk_id = match api.list_risks(&RiskFilter::default()).await {
        Ok(risks) => risks.first().map(|r| r.id.clone()),
        Err(err) => {
            debug!("risk prerequisite lookup failed: {}", err);
            None
        }
    };

    let jobs = run_step(&mut records, "GET /jobs", api.list_jobs(), |jobs| {
        format!("found {} jobs", jobs.len())
    })
    .await;

    if jobs.is_none() {
        for name in DEPENDENT_STEPS {
            block_step(&mut records, name, "initial job list failed");
        }
        return records;
    }

    let Some(company_id) = company_id else {
        for name in DEPENDENT_STEPS {
            block_step(&mut records, name, "no company available");
        }
        return records;
    };

    let payload = NewJob::new(&company_id, "Cargo de Teste", "999999");
    let created = run_step(&mut records, "POST /jobs", api.create_job(&payload), |job| {
        format!("created: {}", job.id)
    })
    .await;

    let Some(job) = created else {
        for name in &DEPENDENT_STEPS[1..] {
            block_step(&mut records, name, "create step did not produce an id");
        }
        return records;
    };

    run_step(&mut records, "GET /jobs/:id", api.get_job(&job.id), |job| {
        format!("retrieved: {}", job.title)
    })
    .await;

    run_step(
        &mut records,
        "PATCH /jobs/:id",
        api.update_job(&job.id, &JobUpdate::default().title("Cargo de Teste Atualizado")),
        |_| "updated successfully".to_string(),
    )
    .await;

    let notes = JobNotesUpdate::default()
        .activities("Descrição da função")
        .general_recommendations("Análise de riscos");
    run_step(
        &mut records,
        "PATCH /jobs/:id/notes",
        api.update_job_notes(&job.id, &notes),
        |_| "notes updated".to_string(),
    )
    .await;

    run_step(
        &mut records,
        "GET /jobs/:id/notes",
        api.get_job_notes(&job.id),
        |_| "notes retrieved".to_string(),
    )
    .await;

    match &environment_id {
        Some(environment_id) => {
            run_step(
                &mut records,
                "POST /jobs/:id/environments",
                api.add_job_environment(&job.id, &JobEnvironmentLink::new(environment_id)),
                |_| "environment added".to_string(),
            )
            .await;

            run_step(
                &mut records,
                "GET /jobs/:id/environments",
                api.list_job_environments(&job.id),
                |environments| format!("found {} environments", environments.len()),
            )
            .await;
        }
        None => {
            block_step(
                &mut records,
                "POST /jobs/:id/environments",
                "no environment available",
            );
            block_step(
                &mut records,
                "GET /jobs/:id/environments",
                "no environment available",
            );
        }
    }

    match &risk_id {
        Some(risk_id) => {
            run_step(
                &mut records,
                "POST /jobs/:id/risks",
                api.add_job_risk(&job.id, &JobRiskLink::new(risk_id)),
                |_| "risk added".to_string(),
            )
            .await;

            run_step(
                &mut records,
                "GET /jobs/:id/risks",
                api.list_job_risks(&job.id),
                |risks| format!("found {} risks", risks.len()),
            )
            .await;
        }
        None => {
            block_step(&mut records, "POST /jobs/:id/risks", "no risk available");
            block_step(&mut records, "GET /jobs/:id/risks", "no risk available");
        }
    }

    let exam = NewJobExam::new("Audiometria")
        .with_exam_type("ADMISSIONAL")
        .with_is_required(true);
    run_step(
        &mut records,
        "POST /jobs/:id/exams",
        api.add_job_exam(&job.id, &exam),
        |_| "exam added".to_string(),
    )
    .await;

    run_step(
        &mut records,
        "GET /jobs/:id/exams",
        api.list_job_exams(&job.id),
        |exams| format!("found {} exams", exams.len()),
    )
    .await;

    run_step(
        &mut records,
        "DELETE /jobs/:id",
        api.delete_job(&job.id),
        |_| "deleted successfully".to_string(),
    )
    .await;

    records
}
