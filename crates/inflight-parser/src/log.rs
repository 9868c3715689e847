use crate::dialect::{DialectError, DialectSet, DialectSpec};
use crate::line::parse_line;
use inflight_types::{Error, Event, RawLine, Result, Run, Violation, ViolationReason};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_INPUT_BYTES: usize = 8 * 1024 * 1024;
pub const DEFAULT_MAX_LINES: usize = 100_000;

/// Ceilings checked before any line is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_input_bytes: usize,
    pub max_lines: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

impl Limits {
    fn check_bytes(&self, text: &str) -> Result<()> {
        if text.len() > self.max_input_bytes {
            return Err(too_large(format!(
                "{} bytes, limit {}",
                text.len(),
                self.max_input_bytes
            )));
        }
        Ok(())
    }

    fn check_lines(&self, lines: usize) -> Result<()> {
        if lines > self.max_lines {
            return Err(too_large(format!(
                "{} lines, limit {}",
                lines, self.max_lines
            )));
        }
        Ok(())
    }
}

fn too_large(limit: String) -> Error {
    Error::FormatViolation(Violation::whole_input(ViolationReason::TooLarge { limit }))
}

/// Non-blank lines with their 1-based position in the original text
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = RawLine<'_>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| RawLine::new(i + 1, line))
}

/// Whole-log parser: every non-blank line must decode or the run is rejected
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    dialects: DialectSet,
    limits: Limits,
}

impl LogParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_dialects(mut self, dialects: DialectSet) -> Self {
        self.dialects = dialects;
        self
    }

    /// Built-in dialects followed by user dialects
    pub fn with_extra_dialects(self, specs: &[DialectSpec]) -> std::result::Result<Self, DialectError> {
        let dialects = DialectSet::with_specs(specs)?;
        Ok(self.with_dialects(dialects))
    }

    pub fn dialects(&self) -> &DialectSet {
        &self.dialects
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn parse_line(&self, raw: RawLine<'_>) -> Result<Event> {
        parse_line(raw, &self.dialects)
    }

    pub fn parse_log(&self, text: &str) -> Result<Run> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        self.limits.check_bytes(text)?;

        let lines: Vec<RawLine<'_>> = non_blank_lines(text).collect();
        self.limits.check_lines(lines.len())?;

        let events = lines
            .iter()
            .map(|raw| self.parse_line(*raw))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            lines = lines.len(),
            events = events.len(),
            "parsed log"
        );

        Ok(Run {
            lines: lines.len(),
            events,
        })
    }
}

/// Parse with the built-in dialects and default limits
pub fn parse_log(text: &str) -> Result<Run> {
    LogParser::default().parse_log(text)
}
