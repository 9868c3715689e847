use inflight_types::{Event, JoinKey, Report, Run};

fn key(event: &Event, join_key: JoinKey) -> (u32, Option<u32>) {
    match join_key {
        JoinKey::TaskIndex => (event.task_index, None),
        JoinKey::Cohort => (event.task_index, Some(event.total_tasks)),
    }
}

fn open_key(index: u32, total: u32, join_key: JoinKey) -> (u32, Option<u32>) {
    match join_key {
        JoinKey::TaskIndex => (index, None),
        JoinKey::Cohort => (index, Some(total)),
    }
}

/// Panics unless `report` satisfies the subset, completeness and ordering
/// properties against the run it was computed from
pub fn assert_report_consistent(run: &Run, report: &Report) {
    let join_key = report.summary.join_key;
    let has_terminal = |k: (u32, Option<u32>)| run.terminals().any(|t| key(t, join_key) == k);

    for task in &report.open_tasks {
        let k = open_key(task.task_index, task.total_tasks, join_key);
        let start = run.starts().find(|s| {
            key(s, join_key) == k
                && s.timestamp == task.start_time
                && s.task_name.as_deref() == Some(task.task_name.as_str())
        });
        assert!(
            start.is_some(),
            "open task {} ({}) is not a START event",
            task.task_index,
            task.task_name
        );
        assert!(
            !has_terminal(k),
            "open task {} ({}) has a terminal event",
            task.task_index,
            task.task_name
        );
    }

    for start in run.starts() {
        let k = key(start, join_key);
        let reported = report
            .open_tasks
            .iter()
            .any(|t| open_key(t.task_index, t.total_tasks, join_key) == k);
        assert!(
            reported || has_terminal(k),
            "START on line {} is neither open nor closed",
            start.line_number
        );
    }

    for pair in report.open_tasks.windows(2) {
        assert!(
            (pair[0].start_time, pair[0].task_index) <= (pair[1].start_time, pair[1].task_index),
            "open tasks out of order: {} before {}",
            pair[0].task_index,
            pair[1].task_index
        );
    }

    assert_eq!(report.summary.open, report.open_tasks.len());
}

/// Task indices of the open tasks, in report order
pub fn open_indices(report: &Report) -> Vec<u32> {
    report.open_tasks.iter().map(|t| t.task_index).collect()
}

/// Task names of the open tasks, in report order
pub fn open_names(report: &Report) -> Vec<&str> {
    report
        .open_tasks
        .iter()
        .map(|t| t.task_name.as_str())
        .collect()
}
