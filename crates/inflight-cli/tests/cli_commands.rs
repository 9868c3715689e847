mod common;

use common::TestFixture;
use inflight_parser::{FILLER_DIALECT, get_dialect_names};
use inflight_testing::fixtures::HYRULE_EXAMPLE;
use predicates::prelude::*;

#[test]
fn test_no_command_prints_guidance() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("inflight example | inflight scan"));
}

#[test]
fn test_help_lists_commands() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("example"))
        .stdout(predicate::str::contains("dialects"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn test_scan_help_lists_options() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["scan", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--join-key"))
        .stdout(predicate::str::contains("--max-bytes"))
        .stdout(predicate::str::contains("--max-lines"))
        .stdout(predicate::str::contains("--quiet"));
}

#[test]
fn test_example_prints_the_sample_log() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("example")
        .assert()
        .success()
        .stdout(HYRULE_EXAMPLE.text);
}

#[test]
fn test_example_round_trips_through_scan() {
    let fixture = TestFixture::new();

    let example = fixture.command().arg("example").output().unwrap();
    assert!(example.status.success());

    fixture
        .command()
        .args(["scan", "--quiet"])
        .write_stdin(example.stdout)
        .assert()
        .success()
        .stdout(
            "hyrule.source_rewards\nhyrule.dim_fairies\nhyrule.fct_quests\nhyrule.mart_worlds\nhyrule.heart_matrix\n",
        );
}

#[test]
fn test_dialects_quiet_lists_names_in_match_order() {
    let fixture = TestFixture::new();

    let mut expected = get_dialect_names().join("\n");
    expected.push('\n');
    expected.push_str(FILLER_DIALECT);
    expected.push('\n');

    fixture
        .command()
        .args(["dialects", "--quiet"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_dialects_json() {
    let fixture = TestFixture::new();

    let output = fixture
        .command()
        .args(["--format", "json", "dialects"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dialects = json["content"]["dialects"].as_array().unwrap();
    assert_eq!(dialects[0]["name"], "model");
    assert_eq!(dialects[0]["builtin"], true);
    assert!(dialects[0]["patterns"][0].as_str().unwrap().contains("(?P<name>"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--log-level", "debug", "scan", "--quiet"])
        .write_stdin(HYRULE_EXAMPLE.text)
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("reconstructed run"));
}
