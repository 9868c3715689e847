// NOTE: this crate only does I/O (reading the log, loading config,
// rendering). Decoding and correlation live in inflight-parser and
// inflight-engine; JSON output is the engine's Report in a view model.

mod args;
mod commands;
pub mod config;
mod handlers;
mod input;
mod logging;
pub mod presentation;

pub use args::{Cli, Commands, JoinKeyArg, LogLevel, OutputFormat, ViewModeArgs};
pub use commands::run;
