//! Line normalizer for dbt console output.
//!
//! Every progress line shares a header (`HH:MM:SS  <n> of <total> <PHASE>`)
//! that is extracted the same way regardless of what follows. The remainder
//! of the line is handed to an ordered table of named dialects, one per
//! family of dbt nodes, which pull out the task name and kind. New log
//! shapes are supported by adding a dialect, either in `registry.rs` or from
//! the user's config file.

pub mod dialect;
pub mod escape;
pub mod line;
pub mod log;
pub mod registry;

pub use dialect::{BodyMatch, Dialect, DialectError, DialectSet, DialectSpec};
pub use escape::strip_escapes;
pub use line::{Header, parse_header, parse_line};
pub use log::{DEFAULT_MAX_INPUT_BYTES, DEFAULT_MAX_LINES, Limits, LogParser, non_blank_lines, parse_log};
pub use registry::{
    DialectMetadata, FILLER_DIALECT, get_all_dialects, get_dialect_metadata, get_dialect_names,
};
