use inflight_types::{OpenTask, Report, RunSummary};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScanViewModel {
    /// Where the log was read from (`stdin` or a path)
    pub source: String,
    pub open_tasks: Vec<OpenTask>,
    pub summary: RunSummary,
}

impl ScanViewModel {
    pub fn new(source: impl Into<String>, report: Report) -> Self {
        Self {
            source: source.into(),
            open_tasks: report.open_tasks,
            summary: report.summary,
        }
    }
}
