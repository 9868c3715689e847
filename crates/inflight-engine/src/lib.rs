// Engine module - run-state reconstruction
// Sits between decoded events (parser) and CLI presentation

pub mod correlate;
mod summary;

pub use correlate::{Correlation, TaskKey};

use inflight_parser::LogParser;
use inflight_types::{Error, JoinKey, Report, Result, Run, Violation, ViolationReason};

/// Everything that shapes one scan: how lines are decoded and how events are joined
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub join_key: JoinKey,
    pub parser: LogParser,
}

impl Options {
    pub fn with_join_key(mut self, join_key: JoinKey) -> Self {
        self.join_key = join_key;
        self
    }

    pub fn with_parser(mut self, parser: LogParser) -> Self {
        self.parser = parser;
        self
    }
}

// Façade API - Stable public interface for CLI layer

/// Correlate the events of a parsed run and list the tasks still in flight
pub fn reconstruct(run: &Run, join_key: JoinKey) -> Result<Report> {
    if run.is_empty() {
        if run.lines == 0 {
            return Err(Error::EmptyInput);
        }
        return Err(Error::FormatViolation(Violation::whole_input(
            ViolationReason::NoEvents,
        )));
    }

    let correlation = Correlation::build(run, join_key)?;
    let open_tasks = correlation.open_tasks();
    let summary = summary::summarize(run, &correlation, open_tasks.len());

    tracing::debug!(
        starts = summary.starts,
        terminals = summary.terminals,
        orphans = summary.orphans,
        open = summary.open,
        join_key = %join_key,
        "reconstructed run"
    );
    if summary.has_numbering_restart() {
        tracing::debug!(cohorts = ?summary.cohorts, "task numbering restarted mid-run");
    }

    Ok(Report {
        open_tasks,
        summary,
    })
}

/// Parse a whole log and report its open tasks
pub fn find_open_tasks(text: &str, options: &Options) -> Result<Report> {
    let run = options.parser.parse_log(text)?;
    reconstruct(&run, options.join_key).map_err(|err| attach_line_text(err, text))
}

/// Correlation only sees events, so its violations carry a line number but
/// no text; fill the text in from the input
fn attach_line_text(err: Error, text: &str) -> Error {
    match err {
        Error::FormatViolation(mut v) if v.line.is_none() => {
            v.line = v
                .line_number
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| text.lines().nth(i))
                .map(str::to_string);
            Error::FormatViolation(v)
        }
        other => other,
    }
}
