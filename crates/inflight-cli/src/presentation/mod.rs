//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!                                                                  ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Rules
//!
//! * **ViewModels hold raw data.** JSON output is an API: counts stay
//!   numbers and times stay times. Sentences and padding belong to views.
//! * **`ViewMode` is density, not shape.** `Minimal` is names only for
//!   pipes, `Compact` is one line per task, `Standard` is the table,
//!   `Verbose` adds every field and the run summary.
//! * **JSON is always full data.** The view mode never trims JSON.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode,
};
