pub mod error;
pub mod event;
pub mod run;

pub use error::{Error, Result, Violation, ViolationReason};
pub use event::{Event, Phase, RawLine};
pub use run::{JoinKey, OpenTask, Report, Run, RunSummary};
