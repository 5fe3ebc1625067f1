use crate::types::{
    Company, Environment, EnvironmentFilter, EnvironmentRisk, EnvironmentRiskLink,
    EnvironmentUpdate, Job, JobEnvironment, JobEnvironmentLink, JobExam, JobNotes, JobNotesUpdate,
    JobRisk, JobRiskLink, JobUpdate, NewEnvironment, NewJob, NewJobExam, NewRisk, NewRiskCategory,
    Risk, RiskCategory, RiskCategoryUpdate, RiskFilter, RiskUpdate,
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Authentication failed")]
    Authentication,

    #[error("Service unavailable: {message}")]
    ServiceUnavailable { message: String },

    #[error("Unexpected status {status} (expected {expected}): {body}")]
    UnexpectedStatus {
        status: u16,
        expected: u16,
        body: String,
    },
}

impl ApiError {
    /// True when the request completed but the status differed from the
    /// single expected value; everything else is a transport-level failure.
    pub fn is_assertion(&self) -> bool {
        matches!(self, ApiError::UnexpectedStatus { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// One method per Mapping Module endpoint. Create methods expect 201,
/// everything else 200; implementations surface any other status as
/// `ApiError::UnexpectedStatus`.
#[async_trait]
pub trait MappingApi: Send + Sync {
    // Risk categories
    async fn list_risk_categories(&self) -> ApiResult<Vec<RiskCategory>>;
    async fn get_risk_category(&self, id: &str) -> ApiResult<RiskCategory>;
    async fn create_risk_category(&self, payload: &NewRiskCategory) -> ApiResult<RiskCategory>;
    async fn update_risk_category(
        &self,
        id: &str,
        payload: &RiskCategoryUpdate,
    ) -> ApiResult<RiskCategory>;
    async fn delete_risk_category(&self, id: &str) -> ApiResult<()>;

    // Risks
    async fn list_risks(&self, filter: &RiskFilter) -> ApiResult<Vec<Risk>>;
    async fn get_risk(&self, id: &str) -> ApiResult<Risk>;
    async fn create_risk(&self, payload: &NewRisk) -> ApiResult<Risk>;
    async fn update_risk(&self, id: &str, payload: &RiskUpdate) -> ApiResult<Risk>;
    async fn delete_risk(&self, id: &str) -> ApiResult<()>;

    // Environments
    async fn list_environments(&self, filter: &EnvironmentFilter) -> ApiResult<Vec<Environment>>;
    async fn get_environment(&self, id: &str) -> ApiResult<Environment>;
    async fn create_environment(&self, payload: &NewEnvironment) -> ApiResult<Environment>;
    async fn update_environment(
        &self,
        id: &str,
        payload: &EnvironmentUpdate,
    ) -> ApiResult<Environment>;
    async fn delete_environment(&self, id: &str) -> ApiResult<()>;
    async fn add_environment_risk(
        &self,
        id: &str,
        payload: &EnvironmentRiskLink,
    ) -> ApiResult<EnvironmentRisk>;
    async fn list_environment_risks(&self, id: &str) -> ApiResult<Vec<EnvironmentRisk>>;
    async fn remove_environment_risk(&self, id: &str, risk_id: &str) -> ApiResult<()>;

    // Jobs
    async fn list_jobs(&self) -> ApiResult<Vec<Job>>;
    async fn get_job(&self, id: &str) -> ApiResult<Job>;
    async fn create_job(&self, payload: &NewJob) -> ApiResult<Job>;
    async fn update_job(&self, id: &str, payload: &JobUpdate) -> ApiResult<Job>;
    async fn delete_job(&self, id: &str) -> ApiResult<()>;
    async fn get_job_notes(&self, id: &str) -> ApiResult<JobNotes>;
    async fn update_job_notes(&self, id: &str, payload: &JobNotesUpdate) -> ApiResult<JobNotes>;
    async fn add_job_environment(
        &self,
        id: &str,
        payload: &JobEnvironmentLink,
    ) -> ApiResult<JobEnvironment>;
    async fn list_job_environments(&self, id: &str) -> ApiResult<Vec<JobEnvironment>>;
    async fn remove_job_environment(&self, id: &str, environment_id: &str) -> ApiResult<()>;
    async fn add_job_risk(&self, id: &str, payload: &JobRiskLink) -> ApiResult<JobRisk>;
    async fn list_job_risks(&self, id: &str) -> ApiResult<Vec<JobRisk>>;
    async fn remove_job_risk(&self, id: &str, risk_id: &str) -> ApiResult<()>;
    async fn add_job_exam(&self, id: &str, payload: &NewJobExam) -> ApiResult<JobExam>;
    async fn list_job_exams(&self, id: &str) -> ApiResult<Vec<JobExam>>;
    async fn remove_job_exam(&self, id: &str, exam_name: &str) -> ApiResult<()>;

    // Companies (fixture source)
    async fn list_companies(&self) -> ApiResult<Vec<Company>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_classification() {
        let err = ApiError::UnexpectedStatus {
            status: 404,
            expected: 200,
            body: "Not Found".to_string(),
        };
        assert!(err.is_assertion());

        let err = ApiError::ServiceUnavailable {
            message: "Request timeout".to_string(),
        };
        assert!(!err.is_assertion());

        let err = ApiError::Authentication;
        assert!(!err.is_assertion());
    }

    #[test]
    fn test_unexpected_status_display() {
        let err = ApiError::UnexpectedStatus {
            status: 400,
            expected: 201,
            body: "validation failed".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("400"));
        assert!(text.contains("201"));
        assert!(text.contains("validation failed"));
    }
}
