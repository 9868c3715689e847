use super::common::ViewModeArgs;
use super::enums::JoinKeyArg;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Find tasks that started but never reported completion
    Scan {
        /// Log file to read; stdin when absent or "-"
        path: Option<PathBuf>,

        /// How START lines are matched with their completion lines
        #[arg(long)]
        join_key: Option<JoinKeyArg>,

        /// Reject input larger than this many bytes
        #[arg(long)]
        max_bytes: Option<usize>,

        /// Reject input with more than this many non-blank lines
        #[arg(long)]
        max_lines: Option<usize>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    /// Print a sample in-progress dbt log
    Example,

    /// List the line dialects the parser recognizes
    Dialects {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}
