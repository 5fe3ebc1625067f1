pub mod api;
pub mod config;
pub mod rest;
pub mod types;

pub use api::{ApiError, ApiResult, MappingApi};
pub use config::{ApiConfig, BASE_URL_ENV, TOKEN_ENV};
pub use rest::RestClient;
pub use types::{
    CategoryRef, Company, Environment, EnvironmentFilter, EnvironmentRef, EnvironmentRisk,
    EnvironmentRiskLink, EnvironmentUpdate, Job, JobEnvironment, JobEnvironmentLink, JobExam,
    JobNotes, JobNotesUpdate, JobRisk, JobRiskLink, JobUpdate, LocationType, NewEnvironment,
    NewJob, NewJobExam, NewRisk, NewRiskCategory, Risk, RiskCategory, RiskCategoryUpdate,
    RiskFilter, RiskIntensity, RiskRef, RiskType, RiskUpdate,
};

pub mod prelude {
    pub use crate::api::*;
    pub use crate::config::*;
    pub use crate::rest::*;
    pub use crate::types::*;
}
