use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ScanViewModel, StatusBadge,
};
use inflight_types::{JoinKey, Report};

/// One sentence for the number of tasks still running
pub fn headline(open: usize) -> String {
    match open {
        0 => "Hmm, I couldn't find any models still running!".to_string(),
        1 => "Looks like there's 1 model still running.".to_string(),
        n => format!("Looks like there's {} models still running.", n),
    }
}

pub fn present_scan(source: &str, report: Report) -> CommandResultViewModel<ScanViewModel> {
    let open = report.open_count();
    let summary = &report.summary;

    let badge = if open == 0 {
        StatusBadge::success(headline(open))
    } else {
        StatusBadge::info(headline(open))
    };

    let mut suggestions = Vec::new();
    if summary.orphans > 0 {
        suggestions.push(Guidance::new(format!(
            "{} task(s) finished without a START line; the log may be missing its beginning",
            summary.orphans
        )));
    }
    if summary.has_numbering_restart() && summary.join_key == JoinKey::TaskIndex {
        let cohorts: Vec<String> = summary.cohorts.iter().map(|t| format!("of {}", t)).collect();
        suggestions.push(
            Guidance::new(format!(
                "Task numbering changed mid-run ({}); if indices repeat, match within each group",
                cohorts.join(", ")
            ))
            .with_command("inflight scan --join-key cohort"),
        );
    }

    let mut result = CommandResultViewModel::new(ScanViewModel::new(source, report)).with_badge(badge);
    for guide in suggestions {
        result = result.with_suggestion(guide);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use inflight_engine::{Options, find_open_tasks};
    use inflight_testing::LogBuilder;
    use inflight_testing::fixtures::{DBT_CORE_RUN2, HYRULE_EXAMPLE};

    #[test]
    fn test_headline_wording() {
        assert_eq!(headline(0), "Hmm, I couldn't find any models still running!");
        assert_eq!(headline(1), "Looks like there's 1 model still running.");
        assert_eq!(headline(5), "Looks like there's 5 models still running.");
    }

    #[test]
    fn test_settled_run_gets_success_badge() {
        let log = LogBuilder::new(1)
            .start(1, "10:00:00", "a.one")
            .ok(1, "10:00:01", "a.one")
            .build();
        let report = find_open_tasks(&log, &Options::default()).unwrap();

        let vm = present_scan("stdin", report);
        let badge = vm.badge.unwrap();
        assert_eq!(badge.level, crate::presentation::StatusLevel::Success);
        assert!(vm.suggestions.is_empty());
    }

    #[test]
    fn test_numbering_restart_suggests_cohort_join() {
        let report = find_open_tasks(HYRULE_EXAMPLE.text, &Options::default()).unwrap();
        let vm = present_scan("stdin", report);

        assert_eq!(vm.suggestions.len(), 1);
        assert!(vm.suggestions[0].description.contains("of 10, of 12"));
        assert_eq!(
            vm.suggestions[0].command.as_deref(),
            Some("inflight scan --join-key cohort")
        );
    }

    #[test]
    fn test_orphans_are_pointed_out() {
        let report = find_open_tasks(DBT_CORE_RUN2.text, &Options::default()).unwrap();
        let vm = present_scan("stdin", report);
        assert!(vm.suggestions[0].description.starts_with("1 task(s)"));
    }

    #[test]
    fn test_json_shape() {
        let log = LogBuilder::new(2)
            .start(1, "10:00:00", "hyrule.one")
            .start(2, "10:00:01", "hyrule.two")
            .ok(1, "10:00:05", "hyrule.one")
            .build();
        let report = find_open_tasks(&log, &Options::default()).unwrap();

        insta::assert_json_snapshot!(present_scan("run.log", report), @r###"
        {
          "badge": {
            "level": "info",
            "label": "Looks like there's 1 model still running."
          },
          "content": {
            "source": "run.log",
            "open_tasks": [
              {
                "task_index": 2,
                "total_tasks": 2,
                "start_time": "10:00:01",
                "task_name": "hyrule.two",
                "kind": "table"
              }
            ],
            "summary": {
              "lines": 3,
              "events": 3,
              "starts": 2,
              "terminals": 1,
              "ok": 1,
              "error": 0,
              "fail": 0,
              "pass": 0,
              "warn": 0,
              "skip": 0,
              "orphans": 0,
              "open": 1,
              "first_timestamp": "10:00:00",
              "last_timestamp": "10:00:05",
              "cohorts": [
                2
              ],
              "join_key": "task_index"
            }
          }
        }
        "###);
    }
}
