pub mod report;
pub mod suite;

pub use report::{FailureKind, RunReport, StepRecord, StepStatus, Summary};
pub use suite::{run_groups, Group};
