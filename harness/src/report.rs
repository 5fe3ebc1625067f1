use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Response received, status differed from the expected value.
    Assertion,
    /// Request or decode failed before a status could be asserted.
    Transport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Passed,
    Failed(FailureKind),
    /// Prerequisite missing; the step was never attempted.
    Blocked,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepRecord {
    pub name: String,
    pub status: StepStatus,
    pub detail: Option<String>,
}

impl StepRecord {
    pub fn passed(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Passed,
            detail: Some(detail.into()),
        }
    }

    pub fn failed(name: impl Into<String>, kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Failed(kind),
            detail: Some(detail.into()),
        }
    }

    pub fn blocked(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Blocked,
            detail: Some(reason.into()),
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self.status {
            StepStatus::Passed => "✓",
            StepStatus::Failed(_) => "✗",
            StepStatus::Blocked => "⊘",
        }
    }

    /// One progress line: glyph + name, detail indented below when present.
    pub fn render_line(&self) -> String {
        match &self.detail {
            Some(detail) if !detail.is_empty() => {
                format!("{} {}\n   {}", self.glyph(), self.name, detail)
            }
            _ => format!("{} {}", self.glyph(), self.name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub blocked: usize,
}

impl Summary {
    /// Steps that actually went out on the wire.
    pub fn attempted(&self) -> usize {
        self.passed + self.failed
    }

    /// Pass rate over attempted steps; absent when nothing was attempted.
    pub fn success_rate(&self) -> Option<f64> {
        let attempted = self.attempted();
        if attempted == 0 {
            return None;
        }
        Some(self.passed as f64 / attempted as f64 * 100.0)
    }
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub started_at: String,
    pub steps: Vec<StepRecord>,
}

impl RunReport {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now().to_rfc3339(),
            steps: Vec::new(),
        }
    }

    pub fn extend(&mut self, steps: Vec<StepRecord>) {
        self.steps.extend(steps);
    }

    pub fn summary(&self) -> Summary {
        let mut summary = Summary {
            total: self.steps.len(),
            passed: 0,
            failed: 0,
            blocked: 0,
        };

        for step in &self.steps {
            match step.status {
                StepStatus::Passed => summary.passed += 1,
                StepStatus::Failed(_) => summary.failed += 1,
                StepStatus::Blocked => summary.blocked += 1,
            }
        }

        summary
    }

    pub fn has_failures(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step.status, StepStatus::Failed(_)))
    }

    pub fn failed_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|step| matches!(step.status, StepStatus::Failed(_)))
    }

    pub fn blocked_steps(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|step| step.status == StepStatus::Blocked)
    }

    /// Final summary block, in the shape the progress log ends with.
    pub fn render_summary(&self) -> String {
        let summary = self.summary();
        let mut out = String::new();
        let rule = "=".repeat(60);

        out.push_str(&format!("\n{rule}\nTEST SUMMARY\n{rule}\n"));
        out.push_str(&format!("Total steps:   {}\n", summary.total));
        out.push_str(&format!("✓ Passed:      {}\n", summary.passed));
        out.push_str(&format!("✗ Failed:      {}\n", summary.failed));
        out.push_str(&format!("⊘ Blocked:     {}\n", summary.blocked));
        match summary.success_rate() {
            Some(rate) => out.push_str(&format!("Success rate:  {:.1}%\n", rate)),
            None => out.push_str("Success rate:  n/a (no steps attempted)\n"),
        }
        out.push_str(&rule);

        if summary.failed > 0 {
            out.push_str("\n\nFailed steps:\n");
            for step in self.failed_steps() {
                out.push_str(&format!(
                    "   - {}: {}\n",
                    step.name,
                    step.detail.as_deref().unwrap_or("")
                ));
            }
        }

        if summary.blocked > 0 {
            out.push_str("\n\nBlocked steps:\n");
            for step in self.blocked_steps() {
                out.push_str(&format!(
                    "   - {}: {}\n",
                    step.name,
                    step.detail.as_deref().unwrap_or("")
                ));
            }
        }

        out
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_arithmetic() {
        let mut report = RunReport::new();
        report.extend(vec![
            StepRecord::passed("GET /jobs", "found 2 jobs"),
            StepRecord::failed("POST /jobs", FailureKind::Assertion, "status 400"),
            StepRecord::blocked("GET /jobs/:id", "create step did not produce an id"),
            StepRecord::passed("GET /companies", "found 1 companies"),
        ]);

        let summary = report.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.blocked, 1);
        assert_eq!(summary.attempted(), 3);
        assert_eq!(summary.passed + summary.failed + summary.blocked, summary.total);
    }

    #[test]
    fn test_success_rate_one_decimal() {
        let mut report = RunReport::new();
        report.extend(vec![
            StepRecord::passed("a", ""),
            StepRecord::passed("b", ""),
            StepRecord::failed("c", FailureKind::Transport, "timeout"),
        ]);

        let rate = report.summary().success_rate().unwrap();
        assert!((rate - 66.666).abs() < 0.01);
        assert!(report.render_summary().contains("66.7%"));
    }

    #[test]
    fn test_empty_report_does_not_panic() {
        let report = RunReport::new();
        let summary = report.summary();
        assert_eq!(summary.total, 0);
        assert!(summary.success_rate().is_none());

        let rendered = report.render_summary();
        assert!(rendered.contains("no steps attempted"));
    }

    #[test]
    fn test_blocked_not_counted_as_attempted() {
        let mut report = RunReport::new();
        report.extend(vec![StepRecord::blocked("x", "missing prerequisite")]);

        let summary = report.summary();
        assert_eq!(summary.attempted(), 0);
        assert!(summary.success_rate().is_none());
        assert!(!report.has_failures());
    }

    #[test]
    fn test_render_line_includes_detail() {
        let record = StepRecord::passed("GET /risks", "found 3 risks");
        let line = record.render_line();
        assert!(line.starts_with("✓ GET /risks"));
        assert!(line.contains("found 3 risks"));

        let record = StepRecord::failed("POST /risks", FailureKind::Transport, "timeout");
        assert!(record.render_line().starts_with("✗ POST /risks"));

        let record = StepRecord::blocked("DELETE /risks/:id", "no risk available");
        assert!(record.render_line().starts_with("⊘ DELETE /risks/:id"));
    }

    #[test]
    fn test_report_serializes() {
        let mut report = RunReport::new();
        report.extend(vec![
            StepRecord::passed("GET /companies", "found 1 companies"),
            StepRecord::failed("POST /jobs", FailureKind::Transport, "timeout"),
        ]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["steps"].as_array().unwrap().len(), 2);
        assert_eq!(json["steps"][0]["status"], "passed");
        assert_eq!(json["steps"][1]["status"]["failed"], "transport");
    }

    #[test]
    fn test_failed_steps_listed_in_summary() {
        let mut report = RunReport::new();
        report.extend(vec![StepRecord::failed(
            "PATCH /jobs/:id",
            FailureKind::Assertion,
            "Unexpected status 404 (expected 200): not found",
        )]);

        let rendered = report.render_summary();
        assert!(rendered.contains("Failed steps:"));
        assert!(rendered.contains("PATCH /jobs/:id"));
        assert!(rendered.contains("404"));
    }
}
