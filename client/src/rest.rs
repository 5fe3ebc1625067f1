use crate::api::{ApiError, ApiResult, MappingApi};
use crate::config::ApiConfig;
use crate::types::{
    Company, Environment, EnvironmentFilter, EnvironmentRisk, EnvironmentRiskLink,
    EnvironmentUpdate, Job, JobEnvironment, JobEnvironmentLink, JobExam, JobNotes, JobNotesUpdate,
    JobRisk, JobRiskLink, JobUpdate, NewEnvironment, NewJob, NewJobExam, NewRisk, NewRiskCategory,
    Risk, RiskCategory, RiskCategoryUpdate, RiskFilter, RiskUpdate,
};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

pub struct RestClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl RestClient {
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        config
            .validate()
            .map_err(|msg| ApiError::InvalidConfig { message: msg })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self { client, config })
    }

    pub fn from_env() -> ApiResult<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.trimmed_base_url(), path)
    }

    /// Every request carries the same bearer + content-type header pair.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.client
            .request(method, url)
            .bearer_auth(&self.config.token)
            .header(CONTENT_TYPE, "application/json")
    }

    fn handle_http_error(err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::ServiceUnavailable {
                message: "Request timeout".to_string(),
            }
        } else if err.is_connect() {
            ApiError::ServiceUnavailable {
                message: "Cannot connect to the Mapping API".to_string(),
            }
        } else {
            ApiError::Network(err)
        }
    }

    /// Compares against the single expected status. 401/403 surface as
    /// authentication failures; any other mismatch is an assertion-level
    /// error carrying the body text.
    async fn check_status(
        response: reqwest::Response,
        expected: StatusCode,
    ) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Authentication);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::UnexpectedStatus {
            status: status.as_u16(),
            expected: expected.as_u16(),
            body,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .request(Method::GET, path)
            .send()
            .await
            .map_err(Self::handle_http_error)?;

        let response = Self::check_status(response, StatusCode::OK).await?;
        response.json().await.map_err(Self::handle_http_error)
    }

    async fn get_json_filtered<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        filter: &Q,
    ) -> ApiResult<T> {
        let response = self
            .request(Method::GET, path)
            .query(filter)
            .send()
            .await
            .map_err(Self::handle_http_error)?;

        let response = Self::check_status(response, StatusCode::OK).await?;
        response.json().await.map_err(Self::handle_http_error)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .request(Method::POST, path)
            .json(body)
            .send()
            .await
            .map_err(Self::handle_http_error)?;

        let response = Self::check_status(response, StatusCode::CREATED).await?;
        response.json().await.map_err(Self::handle_http_error)
    }

    async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self
            .request(Method::PATCH, path)
            .json(body)
            .send()
            .await
            .map_err(Self::handle_http_error)?;

        let response = Self::check_status(response, StatusCode::OK).await?;
        response.json().await.map_err(Self::handle_http_error)
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, path)
            .send()
            .await
            .map_err(Self::handle_http_error)?;

        Self::check_status(response, StatusCode::OK).await?;
        Ok(())
    }
}

#[async_trait]
impl MappingApi for RestClient {
    async fn list_risk_categories(&self) -> ApiResult<Vec<RiskCategory>> {
        self.get_json("/mapping/risk-categories").await
    }

    async fn get_risk_category(&self, id: &str) -> ApiResult<RiskCategory> {
        self.get_json(&format!("/mapping/risk-categories/{}", id))
            .await
    }

    async fn create_risk_category(&self, payload: &NewRiskCategory) -> ApiResult<RiskCategory> {
        self.post_json("/mapping/risk-categories", payload).await
    }

    async fn update_risk_category(
        &self,
        id: &str,
        payload: &RiskCategoryUpdate,
    ) -> ApiResult<RiskCategory> {
        self.patch_json(&format!("/mapping/risk-categories/{}", id), payload)
            .await
    }

    async fn delete_risk_category(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/mapping/risk-categories/{}", id))
            .await
    }

    async fn list_risks(&self, filter: &RiskFilter) -> ApiResult<Vec<Risk>> {
        self.get_json_filtered("/mapping/risks", filter).await
    }

    async fn get_risk(&self, id: &str) -> ApiResult<Risk> {
        self.get_json(&format!("/mapping/risks/{}", id)).await
    }

    async fn create_risk(&self, payload: &NewRisk) -> ApiResult<Risk> {
        self.post_json("/mapping/risks", payload).await
    }

    async fn update_risk(&self, id: &str, payload: &RiskUpdate) -> ApiResult<Risk> {
        self.patch_json(&format!("/mapping/risks/{}", id), payload)
            .await
    }

    async fn delete_risk(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/mapping/risks/{}", id)).await
    }

    async fn list_environments(&self, filter: &EnvironmentFilter) -> ApiResult<Vec<Environment>> {
        self.get_json_filtered("/mapping/environments", filter)
            .await
    }

    async fn get_environment(&self, id: &str) -> ApiResult<Environment> {
        self.get_json(&format!("/mapping/environments/{}", id))
            .await
    }

    async fn create_environment(&self, payload: &NewEnvironment) -> ApiResult<Environment> {
        self.post_json("/mapping/environments", payload).await
    }

    async fn update_environment(
        &self,
        id: &str,
        payload: &EnvironmentUpdate,
    ) -> ApiResult<Environment> {
        self.patch_json(&format!("/mapping/environments/{}", id), payload)
            .await
    }

    async fn delete_environment(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/mapping/environments/{}", id)).await
    }

    async fn add_environment_risk(
        &self,
        id: &str,
        payload: &EnvironmentRiskLink,
    ) -> ApiResult<EnvironmentRisk> {
        self.post_json(&format!("/mapping/environments/{}/risks", id), payload)
            .await
    }

    async fn list_environment_risks(&self, id: &str) -> ApiResult<Vec<EnvironmentRisk>> {
        self.get_json(&format!("/mapping/environments/{}/risks", id))
            .await
    }

    async fn remove_environment_risk(&self, id: &str, risk_id: &str) -> ApiResult<()> {
        self.delete(&format!("/mapping/environments/{}/risks/{}", id, risk_id))
            .await
    }

    async fn list_jobs(&self) -> ApiResult<Vec<Job>> {
        self.get_json("/mapping/jobs").await
    }

    async fn get_job(&self, id: &str) -> ApiResult<Job> {
        self.get_json(&format!("/mapping/jobs/{}", id)).await
    }

    async fn create_job(&self, payload: &NewJob) -> ApiResult<Job> {
        self.post_json("/mapping/jobs", payload).await
    }

    async fn update_job(&self, id: &str, payload: &JobUpdate) -> ApiResult<Job> {
        self.patch_json(&format!("/mapping/jobs/{}", id), payload)
            .await
    }

    async fn delete_job(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/mapping/jobs/{}", id)).await
    }

    async fn get_job_notes(&self, id: &str) -> ApiResult<JobNotes> {
        self.get_json(&format!("/mapping/jobs/{}/notes", id)).await
    }

    async fn update_job_notes(&self, id: &str, payload: &JobNotesUpdate) -> ApiResult<JobNotes> {
        self.patch_json(&format!("/mapping/jobs/{}/notes", id), payload)
            .await
    }

    async fn add_job_environment(
        &self,
        id: &str,
        payload: &JobEnvironmentLink,
    ) -> ApiResult<JobEnvironment> {
        self.post_json(&format!("/mapping/jobs/{}/environments", id), payload)
            .await
    }

    async fn list_job_environments(&self, id: &str) -> ApiResult<Vec<JobEnvironment>> {
        self.get_json(&format!("/mapping/jobs/{}/environments", id))
            .await
    }

    async fn remove_job_environment(&self, id: &str, environment_id: &str) -> ApiResult<()> {
        self.delete(&format!(
            "/mapping/jobs/{}/environments/{}",
            id, environment_id
        ))
        .await
    }

    async fn add_job_risk(&self, id: &str, payload: &JobRiskLink) -> ApiResult<JobRisk> {
        self.post_json(&format!("/mapping/jobs/{}/risks", id), payload)
            .await
    }

    async fn list_job_risks(&self, id: &str) -> ApiResult<Vec<JobRisk>> {
        self.get_json(&format!("/mapping/jobs/{}/risks", id)).await
    }

    async fn remove_job_risk(&self, id: &str, risk_id: &str) -> ApiResult<()> {
        self.delete(&format!("/mapping/jobs/{}/risks/{}", id, risk_id))
            .await
    }

    async fn add_job_exam(&self, id: &str, payload: &NewJobExam) -> ApiResult<JobExam> {
        self.post_json(&format!("/mapping/jobs/{}/exams", id), payload)
            .await
    }

    async fn list_job_exams(&self, id: &str) -> ApiResult<Vec<JobExam>> {
        self.get_json(&format!("/mapping/jobs/{}/exams", id)).await
    }

    async fn remove_job_exam(&self, id: &str, exam_name: &str) -> ApiResult<()> {
        self.delete(&format!("/mapping/jobs/{}/exams/{}", id, exam_name))
            .await
    }

    async fn list_companies(&self) -> ApiResult<Vec<Company>> {
        self.get_json("/companies").await
    }
}
