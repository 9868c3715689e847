use inflight_engine::{Options, find_open_tasks};
use inflight_parser::parse_log;
use inflight_testing::assertions::{assert_report_consistent, open_indices, open_names};
use inflight_testing::fixtures::{self, Fixture};
use inflight_types::Report;

fn report_for(fixture: Fixture) -> Report {
    find_open_tasks(fixture.text, &Options::default())
        .unwrap_or_else(|e| panic!("{} failed to scan: {}", fixture.name, e))
}

#[test]
fn test_every_fixture_satisfies_report_properties() {
    for fixture in fixtures::all() {
        let run = parse_log(fixture.text).unwrap();
        let report = report_for(fixture);
        assert_report_consistent(&run, &report);
    }
}

#[test]
fn test_hyrule_example() {
    let report = report_for(fixtures::HYRULE_EXAMPLE);

    insta::assert_json_snapshot!(report.open_tasks, @r###"
    [
      {
        "task_index": 4,
        "total_tasks": 10,
        "start_time": "10:03:09",
        "task_name": "hyrule.source_rewards",
        "kind": "table"
      },
      {
        "task_index": 5,
        "total_tasks": 10,
        "start_time": "10:03:09",
        "task_name": "hyrule.dim_fairies",
        "kind": "table"
      },
      {
        "task_index": 6,
        "total_tasks": 10,
        "start_time": "10:03:09",
        "task_name": "hyrule.fct_quests",
        "kind": "table"
      },
      {
        "task_index": 10,
        "total_tasks": 10,
        "start_time": "10:05:55",
        "task_name": "hyrule.mart_worlds",
        "kind": "incremental"
      },
      {
        "task_index": 11,
        "total_tasks": 12,
        "start_time": "10:06:33",
        "task_name": "hyrule.heart_matrix",
        "kind": "table"
      }
    ]
    "###);
}

#[test]
fn test_dbt_cloud_run1() {
    let report = report_for(fixtures::DBT_CLOUD_RUN1);

    assert_eq!(open_indices(&report), vec![5, 6, 8]);
    assert_eq!(
        open_names(&report),
        vec![
            "analytics.customers",
            "analytics.fct_orders",
            "analytics.customer_ltv"
        ]
    );
    assert_eq!(report.summary.lines, 13);
    assert_eq!(report.summary.starts, 8);
    assert_eq!(report.summary.ok, 5);
}

#[test]
fn test_dbt_core_run1() {
    let report = report_for(fixtures::DBT_CORE_RUN1);

    assert_eq!(
        open_names(&report),
        vec!["dbt_link.int_quest_rewards", "dbt_link.hero_forecast"]
    );
    assert_eq!(report.summary.error, 1);
}

#[test]
fn test_dbt_core_run2_build_with_tests() {
    let report = report_for(fixtures::DBT_CORE_RUN2);

    assert_eq!(open_indices(&report), vec![7, 9]);
    assert_eq!(report.open_tasks[0].kind.as_deref(), Some("incremental"));

    let summary = &report.summary;
    assert_eq!(summary.starts, 8);
    assert_eq!(summary.terminals, 7);
    assert_eq!(summary.ok, 3);
    assert_eq!(summary.pass, 1);
    assert_eq!(summary.fail, 1);
    assert_eq!(summary.warn, 1);
    assert_eq!(summary.skip, 1);
    // task 5 was skipped without ever starting
    assert_eq!(summary.orphans, 1);
}

#[test]
fn test_dbt_core_source_freshness1() {
    let report = report_for(fixtures::DBT_CORE_SOURCE_FRESHNESS1);

    assert_eq!(open_names(&report), vec!["hyrule.quests"]);
    assert_eq!(report.open_tasks[0].kind.as_deref(), Some("freshness"));
    assert_eq!(report.summary.pass, 1);
    assert_eq!(report.summary.warn, 1);
    assert_eq!(report.summary.error, 1);
}
