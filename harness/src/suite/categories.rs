use super::{block_step, run_step};
use crate::report::StepRecord;
use client::{MappingApi, NewRiskCategory, RiskCategoryUpdate};

const DEPENDENT_STEPS: [&str; 4] = [
    "GET /risk-categories/:id",
    "POST /risk-categories",
    "PATCH /risk-categories/:id",
    "DELETE /risk-categories/:id",
];

/// Risk Categories group: list → get-by-id → create → update → delete.
pub async fn run(api: &dyn MappingApi) -> Vec<StepRecord> {
    let mut records = Vec::new();

    let categories = run_step(
        &mut records,
        "GET /risk-categories",
        api.list_risk_categories(),
        |categories| format!("found {} categories", categories.len()),
    )
    .await;

    let Some(categories) = categories else {
        for name in DEPENDENT_STEPS {
            block_step(&mut records, name, "initial category list failed");
        }
        return records;
    };

    match categories.first() {
        Some(category) => {
            run_step(
                &mut records,
                "GET /risk-categories/:id",
                api.get_risk_category(&category.id),
                |category| format!("retrieved: {}", category.name),
            )
            .await;
        }
        None => block_step(
            &mut records,
            "GET /risk-categories/:id",
            "no seeded category available",
        ),
    }

    let payload = NewRiskCategory::new("Riscos de Teste")
        .with_color("#FF5733")
        .with_icon("test-icon");
    let created = run_step(
        &mut records,
        "POST /risk-categories",
        api.create_risk_category(&payload),
        |category| format!("created: {}", category.id),
    )
    .await;

    match created {
        Some(category) => {
            run_step(
                &mut records,
                "PATCH /risk-categories/:id",
                api.update_risk_category(
                    &category.id,
                    &RiskCategoryUpdate::default().name("Riscos de Teste Atualizado"),
                ),
                |_| "updated successfully".to_string(),
            )
            .await;

            run_step(
                &mut records,
                "DELETE /risk-categories/:id",
                api.delete_risk_category(&category.id),
                |_| "deleted successfully".to_string(),
            )
            .await;
        }
        None => {
            block_step(
                &mut records,
                "PATCH /risk-categories/:id",
                "create step did not produce an id",
            );
            block_step(
                &mut records,
                "DELETE /risk-categories/:id",
                "create step did not produce an id",
            );
        }
    }

    records
}
