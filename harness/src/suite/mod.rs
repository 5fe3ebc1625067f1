pub mod categories;
pub mod environments;
pub mod jobs;
pub mod risks;

use crate::report::{FailureKind, RunReport, StepRecord};
use client::{ApiResult, MappingApi};
use std::future::Future;
use tracing::{error, info};

/// The four resource groups, in the order they always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Categories,
    Risks,
    Environments,
    Jobs,
}

impl Group {
    pub const ALL: [Group; 4] = [
        Group::Categories,
        Group::Risks,
        Group::Environments,
        Group::Jobs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Group::Categories => "Risk Categories",
            Group::Risks => "Risks",
            Group::Environments => "Environments",
            Group::Jobs => "Job Mapping",
        }
    }

    pub async fn run(&self, api: &dyn MappingApi) -> Vec<StepRecord> {
        info!("running group: {}", self.name());
        println!("\n== {} ==", self.name());
        match self {
            Group::Categories => categories::run(api).await,
            Group::Risks => risks::run(api).await,
            Group::Environments => environments::run(api).await,
            Group::Jobs => jobs::run(api).await,
        }
    }
}

/// Runs the given groups strictly in order and returns the combined report.
pub async fn run_groups(api: &dyn MappingApi, groups: &[Group]) -> RunReport {
    let mut report = RunReport::new();
    for group in groups {
        report.extend(group.run(api).await);
    }
    report
}

/// Awaits one API call and records its outcome. Returns the value so the
/// caller can thread fixture ids into later steps; `None` means the step
/// failed and dependents should be blocked.
pub(crate) async fn run_step<T, F, D>(
    records: &mut Vec<StepRecord>,
    name: &str,
    fut: F,
    detail: D,
) -> Option<T>
where
    F: Future<Output = ApiResult<T>>,
    D: FnOnce(&T) -> String,
{
    match fut.await {
        Ok(value) => {
            let record = StepRecord::passed(name, detail(&value));
            println!("{}", record.render_line());
            records.push(record);
            Some(value)
        }
        Err(err) => {
            let kind = if err.is_assertion() {
                FailureKind::Assertion
            } else {
                FailureKind::Transport
            };
            error!("step failed: {}: {}", name, err);
            let record = StepRecord::failed(name, kind, err.to_string());
            println!("{}", record.render_line());
            records.push(record);
            None
        }
    }
}

/// Records a step that was never attempted because a prerequisite is
/// missing.
pub(crate) fn block_step(records: &mut Vec<StepRecord>, name: &str, reason: &str) {
    let record = StepRecord::blocked(name, reason);
    println!("{}", record.render_line());
    records.push(record);
}
