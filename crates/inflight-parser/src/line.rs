use crate::dialect::DialectSet;
use crate::escape::strip_escapes;
use chrono::NaiveTime;
use inflight_types::{Error, Event, Phase, RawLine, Result, ViolationReason};
use regex::Regex;
use std::sync::LazyLock;

/// HH:MM:SS not embedded in a longer run of digits
static TIMESTAMP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\D)(\d{2}:\d{2}:\d{2})(?:\D|$)").unwrap());

static PROGRESS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)\s+of\s+(\d+)\b").unwrap());

static PHASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let keywords: Vec<&str> = Phase::ALL.iter().map(|p| p.keyword()).collect();
    Regex::new(&format!(r"\b({})\b", keywords.join("|"))).unwrap()
});

/// Trailing status annotation such as "[RUN]" or "[SELECT in 10.78s]"
static ANNOTATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[[^\[\]]*\]\s*$").unwrap());

/// Fields every dialect shares, pulled out before the body is looked at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub timestamp: NaiveTime,
    pub task_index: u32,
    pub total_tasks: u32,
    pub phase: Phase,
    /// Byte offset just past the phase keyword
    pub body_start: usize,
}

pub fn parse_header(line: &str) -> std::result::Result<Header, ViolationReason> {
    let ts = TIMESTAMP_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .ok_or(ViolationReason::MissingTimestamp)?;
    let timestamp = NaiveTime::parse_from_str(ts.as_str(), "%H:%M:%S")
        .map_err(|_| ViolationReason::InvalidTimestamp(ts.as_str().to_string()))?;

    let progress = PROGRESS_REGEX
        .captures_at(line, ts.end())
        .ok_or(ViolationReason::MissingProgress)?;
    let (Some(whole), Some(index), Some(total)) = (progress.get(0), progress.get(1), progress.get(2))
    else {
        return Err(ViolationReason::MissingProgress);
    };
    let invalid = || ViolationReason::InvalidProgress(whole.as_str().to_string());
    let task_index: u32 = index.as_str().parse().map_err(|_| invalid())?;
    let total_tasks: u32 = total.as_str().parse().map_err(|_| invalid())?;

    let after_progress = &line[whole.end()..];
    let keyword = PHASE_REGEX
        .find(after_progress)
        .ok_or(ViolationReason::MissingPhase)?;
    let phase = Phase::from_keyword(keyword.as_str()).ok_or(ViolationReason::MissingPhase)?;

    Ok(Header {
        timestamp,
        task_index,
        total_tasks,
        phase,
        body_start: whole.end() + keyword.end(),
    })
}

/// True when a second timestamp and progress marker follow the first record,
/// as happens when a bare carriage return joined two lines
fn holds_another_record(rest: &str) -> bool {
    TIMESTAMP_REGEX
        .captures(rest)
        .and_then(|caps| caps.get(1))
        .is_some_and(|ts| PROGRESS_REGEX.is_match_at(rest, ts.end()))
}

/// Text between the phase keyword and the trailing annotation, with dbt's
/// dot-leader padding removed
pub fn isolate_body(rest: &str) -> &str {
    let end = ANNOTATION_REGEX
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    rest[..end]
        .trim_end_matches(|c: char| c == '.' || c.is_whitespace())
        .trim_start()
}

/// Decode one non-blank line into an event
pub fn parse_line(raw: RawLine<'_>, dialects: &DialectSet) -> Result<Event> {
    let cleaned = strip_escapes(raw.text);
    let header =
        parse_header(&cleaned).map_err(|reason| Error::violation(raw.number, raw.text, reason))?;

    let rest = &cleaned[header.body_start..];
    if holds_another_record(rest) {
        return Err(Error::violation(
            raw.number,
            raw.text,
            ViolationReason::MultipleRecords,
        ));
    }

    let body = isolate_body(rest);
    let matched = dialects.match_body(body, header.phase);

    if header.phase.is_start() && matched.task_name.is_none() {
        return Err(Error::violation(
            raw.number,
            raw.text,
            ViolationReason::MissingTaskName,
        ));
    }

    let kind = match (matched.kind, header.phase) {
        (None, Phase::Fail) => Some("test".to_string()),
        (kind, _) => kind,
    };

    tracing::debug!(
        line = raw.number,
        dialect = %matched.dialect,
        index = header.task_index,
        phase = %header.phase,
        "decoded line"
    );

    Ok(Event {
        line_number: raw.number,
        task_index: header.task_index,
        total_tasks: header.total_tasks,
        timestamp: header.timestamp,
        phase: header.phase,
        task_name: matched.task_name,
        kind,
        dialect: matched.dialect,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Event> {
        parse_line(RawLine::new(1, text), &DialectSet::builtin())
    }

    fn reason(text: &str) -> ViolationReason {
        match parse(text) {
            Err(Error::FormatViolation(v)) => v.reason,
            other => panic!("expected a format violation, got {:?}", other),
        }
    }

    #[test]
    fn test_start_line() {
        let event =
            parse("10:03:09  4 of 10 START sql table model hyrule.source_rewards  [RUN]").unwrap();
        assert_eq!(event.task_index, 4);
        assert_eq!(event.total_tasks, 10);
        assert_eq!(event.timestamp, NaiveTime::from_hms_opt(10, 3, 9).unwrap());
        assert_eq!(event.phase, Phase::Start);
        assert_eq!(event.task_name.as_deref(), Some("hyrule.source_rewards"));
        assert_eq!(event.kind.as_deref(), Some("table"));
        assert_eq!(event.dialect, "model");
    }

    #[test]
    fn test_error_line_uses_first_keyword_not_annotation() {
        let event = parse(
            "10:08:35  12 of 12 ERROR creating sql incremental model hyrule.triforce_purchases  [ERROR in 17.03s]",
        )
        .unwrap();
        assert_eq!(event.phase, Phase::Error);
        assert_eq!(event.task_name.as_deref(), Some("hyrule.triforce_purchases"));
    }

    #[test]
    fn test_dbt_core_dot_leaders() {
        let event = parse(
            "10:03:09  1 of 10 START sql view model hyrule.stg_quests ....................... [RUN]",
        )
        .unwrap();
        assert_eq!(event.task_name.as_deref(), Some("hyrule.stg_quests"));
        assert_eq!(event.kind.as_deref(), Some("view"));
    }

    #[test]
    fn test_leading_color_fragment() {
        let event =
            parse("[0m10:03:09  1 of 10 START sql table model hyrule.source_quests  [RUN]").unwrap();
        assert_eq!(event.timestamp, NaiveTime::from_hms_opt(10, 3, 9).unwrap());
        assert_eq!(event.task_index, 1);
    }

    #[test]
    fn test_colored_status_keyword() {
        let event = parse(
            "\x1b[0m10:03:19  1 of 10 \x1b[32mOK\x1b[0m created sql table model hyrule.source_quests  [\x1b[32mSELECT\x1b[0m in 10.78s]",
        )
        .unwrap();
        assert_eq!(event.phase, Phase::Ok);
        assert_eq!(event.task_name.as_deref(), Some("hyrule.source_quests"));
    }

    #[test]
    fn test_fail_without_kind_is_a_test() {
        let event = parse("10:09:10  15 of 20 FAIL 3 hyrule.odd_check thing  [FAIL 3 in 0.12s]")
            .unwrap();
        assert_eq!(event.phase, Phase::Fail);
        assert_eq!(event.dialect, "filler");
        assert_eq!(event.kind.as_deref(), Some("test"));
    }

    #[test]
    fn test_terminal_without_name_is_accepted() {
        let event = parse("10:09:10  15 of 20 PASS  [PASS in 0.12s]").unwrap();
        assert_eq!(event.phase, Phase::Pass);
        assert_eq!(event.task_name, None);
    }

    #[test]
    fn test_violations() {
        assert_eq!(reason("hello world"), ViolationReason::MissingTimestamp);
        assert_eq!(
            reason("10:03:09 Running with dbt=1.7.4"),
            ViolationReason::MissingProgress
        );
        assert_eq!(
            reason("10:03:09  1 of 10 started sql table model a.b"),
            ViolationReason::MissingPhase
        );
        assert_eq!(
            reason("25:03:09  1 of 10 START sql table model a.b"),
            ViolationReason::InvalidTimestamp("25:03:09".to_string())
        );
        assert_eq!(
            reason("10:03:09  1 of 10 START  [RUN]"),
            ViolationReason::MissingTaskName
        );
        assert!(matches!(
            reason("10:03:09  99999999999 of 10 START sql table model a.b"),
            ViolationReason::InvalidProgress(_)
        ));
    }

    #[test]
    fn test_timestamp_must_stand_alone() {
        assert_eq!(
            reason("110:03:09  1 of 10 START sql table model a.b  [RUN]"),
            ViolationReason::MissingTimestamp
        );
        assert_eq!(
            reason("10:03:091  1 of 10 START sql table model a.b  [RUN]"),
            ViolationReason::MissingTimestamp
        );
    }

    #[test]
    fn test_progress_must_follow_timestamp() {
        assert_eq!(
            reason("1 of 10 10:03:09 START sql table model a.b  [RUN]"),
            ViolationReason::MissingProgress
        );
    }

    #[test]
    fn test_carriage_return_joined_records() {
        let text = "10:03:09  1 of 2 START sql table model a.b [RUN]\r10:03:10  2 of 2 START sql table model a.c [RUN]";
        assert_eq!(reason(text), ViolationReason::MultipleRecords);
    }

    #[test]
    fn test_later_timestamp_alone_is_not_a_second_record() {
        let event =
            parse("10:03:09  1 of 2 ERROR creating sql table model a.b  [ERROR at 10:03:12]").unwrap();
        assert_eq!(event.phase, Phase::Error);
        assert_eq!(event.task_name.as_deref(), Some("a.b"));
    }

    #[test]
    fn test_start_needs_a_real_task_name() {
        assert_eq!(
            reason("10:03:09  1 of 10 START hello  [RUN]"),
            ViolationReason::MissingTaskName
        );
        let event = parse("10:03:19  1 of 10 PASS not_null_fct_quests_quest_id  [PASS in 0.1s]")
            .unwrap();
        assert_eq!(event.task_name.as_deref(), Some("not_null_fct_quests_quest_id"));
        assert_eq!(event.kind.as_deref(), Some("test"));
    }

    #[test]
    fn test_keyword_must_follow_progress() {
        assert_eq!(
            reason("10:03:09 START 1 of 10 sql table model a.b"),
            ViolationReason::MissingPhase
        );
    }

    #[test]
    fn test_keyword_must_be_standalone() {
        assert_eq!(
            reason("10:03:09  1 of 10 STARTED sql table model a.b"),
            ViolationReason::MissingPhase
        );
    }
}
