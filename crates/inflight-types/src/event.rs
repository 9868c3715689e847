use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One non-blank line of input, kept for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// 1-based line number in the original text (blank lines are counted)
    pub number: usize,
    pub text: &'a str,
}

impl<'a> RawLine<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }
}

/// Lifecycle keyword printed after the progress marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    Start,
    Ok,
    Error,
    Fail,
    Pass,
    Warn,
    Skip,
}

impl Phase {
    /// Every phase keyword, in the order they are tried
    pub const ALL: [Phase; 7] = [
        Phase::Start,
        Phase::Ok,
        Phase::Error,
        Phase::Fail,
        Phase::Pass,
        Phase::Warn,
        Phase::Skip,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            Phase::Start => "START",
            Phase::Ok => "OK",
            Phase::Error => "ERROR",
            Phase::Fail => "FAIL",
            Phase::Pass => "PASS",
            Phase::Warn => "WARN",
            Phase::Skip => "SKIP",
        }
    }

    /// Case-sensitive lookup; dbt always prints these in upper case
    pub fn from_keyword(word: &str) -> Option<Self> {
        Phase::ALL.into_iter().find(|p| p.keyword() == word)
    }

    pub fn is_start(&self) -> bool {
        matches!(self, Phase::Start)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_start()
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Structured decoding of one log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub line_number: usize,
    pub task_index: u32,
    pub total_tasks: u32,
    pub timestamp: NaiveTime,
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Name of the dialect rule that decoded the line
    pub dialect: String,
}

impl Event {
    pub fn is_start(&self) -> bool {
        self.phase.is_start()
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }
}
