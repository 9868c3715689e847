use crate::correlate::Correlation;
use inflight_types::{Phase, Run, RunSummary};

pub(crate) fn summarize(run: &Run, correlation: &Correlation<'_>, open: usize) -> RunSummary {
    let mut summary = RunSummary {
        lines: run.lines,
        events: run.events.len(),
        starts: correlation.start_count(),
        terminals: correlation.terminal_count(),
        orphans: correlation.orphans().count(),
        open,
        join_key: correlation.join_key,
        ..RunSummary::default()
    };

    for event in &run.events {
        match event.phase {
            Phase::Start => {}
            Phase::Ok => summary.ok += 1,
            Phase::Error => summary.error += 1,
            Phase::Fail => summary.fail += 1,
            Phase::Pass => summary.pass += 1,
            Phase::Warn => summary.warn += 1,
            Phase::Skip => summary.skip += 1,
        }

        if !summary.cohorts.contains(&event.total_tasks) {
            summary.cohorts.push(event.total_tasks);
        }
    }

    summary.first_timestamp = run.events.iter().map(|e| e.timestamp).min();
    summary.last_timestamp = run.events.iter().map(|e| e.timestamp).max();

    summary
}
