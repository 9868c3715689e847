use std::fmt;

/// Result type for inflight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Longest slice of an offending line echoed back in an error message
const MAX_ECHO_CHARS: usize = 120;

/// Errors produced while turning a pasted log into open tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The supplied text is empty or contains only blank lines
    EmptyInput,

    /// The text does not have the expected shape; the whole run is rejected
    FormatViolation(Violation),
}

/// Where and why a log failed structured extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// 1-based line number in the original text, when the failure is tied to a line
    pub line_number: Option<usize>,
    /// The offending line as it was supplied
    pub line: Option<String>,
    pub reason: ViolationReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationReason {
    MissingTimestamp,
    InvalidTimestamp(String),
    MissingProgress,
    InvalidProgress(String),
    MissingPhase,
    MissingTaskName,
    /// More than one timestamped progress record on one line
    MultipleRecords,
    /// A second START shares its correlation key with an earlier one
    DuplicateStart { first_line: usize },
    /// A second terminal line shares its correlation key with an earlier one
    DuplicateTerminal { first_line: usize },
    /// Non-blank input produced no events
    NoEvents,
    /// Input exceeds a configured ceiling
    TooLarge { limit: String },
}

impl Violation {
    pub fn at_line(line_number: usize, line: impl Into<String>, reason: ViolationReason) -> Self {
        Self {
            line_number: Some(line_number),
            line: Some(line.into()),
            reason,
        }
    }

    pub fn whole_input(reason: ViolationReason) -> Self {
        Self {
            line_number: None,
            line: None,
            reason,
        }
    }
}

impl Error {
    pub fn violation(line_number: usize, line: impl Into<String>, reason: ViolationReason) -> Self {
        Error::FormatViolation(Violation::at_line(line_number, line, reason))
    }

    pub fn is_empty_input(&self) -> bool {
        matches!(self, Error::EmptyInput)
    }

    pub fn as_violation(&self) -> Option<&Violation> {
        match self {
            Error::FormatViolation(v) => Some(v),
            Error::EmptyInput => None,
        }
    }
}

impl fmt::Display for ViolationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationReason::MissingTimestamp => write!(f, "no HH:MM:SS timestamp"),
            ViolationReason::InvalidTimestamp(ts) => write!(f, "invalid timestamp '{}'", ts),
            ViolationReason::MissingProgress => write!(f, "no '<n> of <total>' progress marker"),
            ViolationReason::InvalidProgress(p) => write!(f, "invalid progress marker '{}'", p),
            ViolationReason::MissingPhase => {
                write!(f, "no START/OK/ERROR/FAIL keyword after the progress marker")
            }
            ViolationReason::MissingTaskName => write!(f, "START line without a task name"),
            ViolationReason::MultipleRecords => {
                write!(f, "more than one progress record on the line")
            }
            ViolationReason::DuplicateStart { first_line } => {
                write!(f, "task already started on line {}", first_line)
            }
            ViolationReason::DuplicateTerminal { first_line } => {
                write!(f, "task already finished on line {}", first_line)
            }
            ViolationReason::NoEvents => write!(f, "no task events found"),
            ViolationReason::TooLarge { limit } => write!(f, "input too large ({})", limit),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input doesn't look like dbt output (")?;
        if let Some(n) = self.line_number {
            write!(f, "line {}: ", n)?;
        }
        write!(f, "{})", self.reason)?;
        if let Some(line) = &self.line {
            write!(f, ": {}", echo(line))?;
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "no input: paste or pipe a dbt log to scan"),
            Error::FormatViolation(v) => write!(f, "{}", v),
        }
    }
}

impl std::error::Error for Error {}

fn echo(line: &str) -> String {
    let trimmed = line.trim();
    if trimmed.chars().count() <= MAX_ECHO_CHARS {
        trimmed.to_string()
    } else {
        trimmed.chars().take(MAX_ECHO_CHARS).collect::<String>() + "..."
    }
}
