use inflight_types::{Error, Event, JoinKey, OpenTask, Result, Run, Violation, ViolationReason};
use std::collections::BTreeMap;

/// Correlation key for one event under a join policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskKey {
    pub task_index: u32,
    /// Set only under `JoinKey::Cohort`
    pub cohort: Option<u32>,
}

impl TaskKey {
    pub fn of(event: &Event, join_key: JoinKey) -> Self {
        Self {
            task_index: event.task_index,
            cohort: match join_key {
                JoinKey::TaskIndex => None,
                JoinKey::Cohort => Some(event.total_tasks),
            },
        }
    }
}

/// STARTS and TERMINALS of a run, each indexed by correlation key
#[derive(Debug)]
pub struct Correlation<'a> {
    pub join_key: JoinKey,
    starts: BTreeMap<TaskKey, &'a Event>,
    terminals: BTreeMap<TaskKey, &'a Event>,
}

impl<'a> Correlation<'a> {
    /// Partition the run and index both halves. A key seen twice on the same
    /// side (a retried or non-monotonic run) rejects the whole run.
    pub fn build(run: &'a Run, join_key: JoinKey) -> Result<Self> {
        let mut starts = BTreeMap::new();
        let mut terminals = BTreeMap::new();

        for event in &run.events {
            let key = TaskKey::of(event, join_key);
            if event.is_start() {
                if event.task_name.is_none() {
                    return Err(violation(event, ViolationReason::MissingTaskName));
                }
                if let Some(first) = starts.insert(key, event) {
                    return Err(violation(
                        event,
                        ViolationReason::DuplicateStart {
                            first_line: first.line_number,
                        },
                    ));
                }
            } else if let Some(first) = terminals.insert(key, event) {
                return Err(violation(
                    event,
                    ViolationReason::DuplicateTerminal {
                        first_line: first.line_number,
                    },
                ));
            }
        }

        Ok(Self {
            join_key,
            starts,
            terminals,
        })
    }

    pub fn start_count(&self) -> usize {
        self.starts.len()
    }

    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    pub fn is_closed(&self, key: &TaskKey) -> bool {
        self.terminals.contains_key(key)
    }

    /// Terminal events with no START under the same key
    pub fn orphans(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.terminals
            .iter()
            .filter(|(key, _)| !self.starts.contains_key(key))
            .map(|(_, event)| *event)
    }

    /// STARTS with no terminal, earliest first
    pub fn open_tasks(&self) -> Vec<OpenTask> {
        let mut open: Vec<OpenTask> = self
            .starts
            .iter()
            .filter(|(key, _)| !self.is_closed(key))
            .filter_map(|(_, event)| {
                Some(OpenTask {
                    task_index: event.task_index,
                    total_tasks: event.total_tasks,
                    start_time: event.timestamp,
                    task_name: event.task_name.clone()?,
                    kind: event.kind.clone(),
                })
            })
            .collect();

        open.sort_by_key(|t| (t.start_time, t.task_index, t.total_tasks));
        open
    }
}

fn violation(event: &Event, reason: ViolationReason) -> Error {
    Error::FormatViolation(Violation {
        line_number: Some(event.line_number),
        line: None,
        reason,
    })
}
