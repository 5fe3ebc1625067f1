use client::prelude::*;
use mockito::Matcher;
use std::time::Duration;

fn test_client(server: &mockito::Server) -> RestClient {
    let config = ApiConfig::default()
        .with_base_url(server.url())
        .with_token("test-token")
        .with_timeout(Duration::from_secs(5));
    RestClient::new(config).unwrap()
}

#[tokio::test]
async fn create_then_get_returns_submitted_name() {
    let mut server = mockito::Server::new_async().await;

    let _create = server
        .mock("POST", "/mapping/risk-categories")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "name": "Riscos de Teste",
            "color": "#FF5733",
        })))
        .with_status(201)
        .with_body(r##"{"id":"cat-9","name":"Riscos de Teste","color":"#FF5733"}"##)
        .create_async()
        .await;
    let _get = server
        .mock("GET", "/mapping/risk-categories/cat-9")
        .with_status(200)
        .with_body(r##"{"id":"cat-9","name":"Riscos de Teste","color":"#FF5733"}"##)
        .create_async()
        .await;

    let client = test_client(&server);
    let payload = NewRiskCategory::new("Riscos de Teste").with_color("#FF5733");
    let created = client.create_risk_category(&payload).await.unwrap();
    assert_eq!(created.name, payload.name);

    let fetched = client.get_risk_category(&created.id).await.unwrap();
    assert_eq!(fetched.name, payload.name);
}

#[tokio::test]
async fn filtered_list_includes_created_physical_risk() {
    let mut server = mockito::Server::new_async().await;

    let _create = server
        .mock("POST", "/mapping/risks")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "categoryId": "cat-1",
            "type": "PHYSICAL",
        })))
        .with_status(201)
        .with_body(
            r#"{"id":"risk-7","categoryId":"cat-1","type":"PHYSICAL","name":"Risco de Teste",
                "allowsIntensity":true,"isGlobal":true,"active":true}"#,
        )
        .create_async()
        .await;
    let _list = server
        .mock("GET", "/mapping/risks")
        .match_query(Matcher::UrlEncoded("type".into(), "PHYSICAL".into()))
        .with_status(200)
        .with_body(
            r#"[{"id":"risk-7","categoryId":"cat-1","type":"PHYSICAL","name":"Risco de Teste",
                 "allowsIntensity":true,"isGlobal":true,"active":true}]"#,
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let payload =
        NewRisk::new("cat-1", RiskType::Physical, "Risco de Teste").with_allows_intensity(true);
    let created = client.create_risk(&payload).await.unwrap();

    let listed = client
        .list_risks(&RiskFilter::by_type(RiskType::Physical))
        .await
        .unwrap();
    assert!(listed.iter().any(|r| r.id == created.id));
}

#[tokio::test]
async fn deleted_category_is_not_asserted_as_present() {
    let mut server = mockito::Server::new_async().await;

    let _delete = server
        .mock("DELETE", "/mapping/risk-categories/cat-1")
        .with_status(200)
        .with_body(r#"{"id":"cat-1","name":"x"}"#)
        .create_async()
        .await;
    let _get = server
        .mock("GET", "/mapping/risk-categories/cat-1")
        .with_status(404)
        .with_body(r#"{"message":"Categoria não encontrada"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    client.delete_risk_category("cat-1").await.unwrap();

    let err = client.get_risk_category("cat-1").await.unwrap_err();
    assert!(err.is_assertion());
}

#[tokio::test]
async fn job_create_update_get_round_trip() {
    let mut server = mockito::Server::new_async().await;

    let _create = server
        .mock("POST", "/mapping/jobs")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "companyId": "company-1",
            "title": "Cargo de Teste",
            "cbo": "999999",
        })))
        .with_status(201)
        .with_body(
            r#"{"id":"job-3","companyId":"company-1","title":"Cargo de Teste",
                "cbo":"999999","mainEnvironmentId":null,"active":true}"#,
        )
        .create_async()
        .await;
    let _patch = server
        .mock("PATCH", "/mapping/jobs/job-3")
        .match_body(Matcher::Json(serde_json::json!({"title": "X"})))
        .with_status(200)
        .with_body(
            r#"{"id":"job-3","companyId":"company-1","title":"X",
                "cbo":"999999","mainEnvironmentId":null,"active":true}"#,
        )
        .create_async()
        .await;
    let _get = server
        .mock("GET", "/mapping/jobs/job-3")
        .with_status(200)
        .with_body(
            r#"{"id":"job-3","companyId":"company-1","title":"X",
                "cbo":"999999","mainEnvironmentId":null,"active":true}"#,
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let created = client
        .create_job(&NewJob::new("company-1", "Cargo de Teste", "999999"))
        .await
        .unwrap();
    assert!(!created.id.is_empty());

    client
        .update_job(&created.id, &JobUpdate::default().title("X"))
        .await
        .unwrap();

    let fetched = client.get_job(&created.id).await.unwrap();
    assert_eq!(fetched.title, "X");
}

#[tokio::test]
async fn environment_risk_link_round_trip() {
    let mut server = mockito::Server::new_async().await;

    let _link = server
        .mock("POST", "/mapping/environments/env-1/risks")
        .match_body(Matcher::Json(serde_json::json!({"riskId": "risk-1"})))
        .with_status(201)
        .with_body(r#"{"id":"link-1","riskId":"risk-1","intensity":null,"notes":null,"risk":null}"#)
        .create_async()
        .await;
    let _list = server
        .mock("GET", "/mapping/environments/env-1/risks")
        .with_status(200)
        .with_body(
            r#"[{"id":"link-1","riskId":null,"intensity":null,"notes":null,
                 "risk":{"id":"risk-1","name":"Ruído","type":"PHYSICAL"}}]"#,
        )
        .create_async()
        .await;

    let client = test_client(&server);
    client
        .add_environment_risk("env-1", &EnvironmentRiskLink::new("risk-1"))
        .await
        .unwrap();

    let linked = client.list_environment_risks("env-1").await.unwrap();
    assert!(linked
        .iter()
        .any(|link| link.linked_risk_id() == Some("risk-1")));
}

#[tokio::test]
async fn job_notes_update_then_get() {
    let mut server = mockito::Server::new_async().await;

    let _patch = server
        .mock("PATCH", "/mapping/jobs/job-1/notes")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "activities": "Descrição da função",
        })))
        .with_status(200)
        .with_body(r#"{"activities":"Descrição da função","generalRecommendations":"Análise"}"#)
        .create_async()
        .await;
    let _get = server
        .mock("GET", "/mapping/jobs/job-1/notes")
        .with_status(200)
        .with_body(r#"{"activities":"Descrição da função","generalRecommendations":"Análise"}"#)
        .create_async()
        .await;

    let client = test_client(&server);
    let payload = JobNotesUpdate::default()
        .activities("Descrição da função")
        .general_recommendations("Análise");
    client.update_job_notes("job-1", &payload).await.unwrap();

    let notes = client.get_job_notes("job-1").await.unwrap();
    assert_eq!(notes.activities.as_deref(), Some("Descrição da função"));
}
