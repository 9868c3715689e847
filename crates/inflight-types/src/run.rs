use crate::event::Event;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every event parsed from one pasted log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Run {
    /// Non-blank lines seen (each one produced an event)
    pub lines: usize,
    pub events: Vec<Event>,
}

impl Run {
    pub fn starts(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_start())
    }

    pub fn terminals(&self) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(|e| e.is_terminal())
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// How START and terminal events are matched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKey {
    /// Task index alone, across denominator changes
    #[default]
    TaskIndex,
    /// Task index scoped to the `of <total>` cohort it was printed with
    Cohort,
}

impl fmt::Display for JoinKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinKey::TaskIndex => write!(f, "task_index"),
            JoinKey::Cohort => write!(f, "cohort"),
        }
    }
}

/// A task that started and has not reported completion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTask {
    pub task_index: u32,
    pub total_tasks: u32,
    pub start_time: NaiveTime,
    pub task_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Counts a presenter needs to describe a run without re-deriving anything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub lines: usize,
    pub events: usize,
    pub starts: usize,
    pub terminals: usize,
    pub ok: usize,
    pub error: usize,
    pub fail: usize,
    pub pass: usize,
    pub warn: usize,
    pub skip: usize,
    /// Terminal events whose START is not in the log
    pub orphans: usize,
    pub open: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_timestamp: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_timestamp: Option<NaiveTime>,
    /// Distinct `of <total>` denominators, in first-seen order
    pub cohorts: Vec<u32>,
    pub join_key: JoinKey,
}

impl RunSummary {
    /// True when the denominator changed mid-run
    pub fn has_numbering_restart(&self) -> bool {
        self.cohorts.len() > 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub open_tasks: Vec<OpenTask>,
    pub summary: RunSummary,
}

impl Report {
    pub fn open_count(&self) -> usize {
        self.open_tasks.len()
    }

    pub fn is_settled(&self) -> bool {
        self.open_tasks.is_empty()
    }
}
