use super::args::{Cli, Commands, ViewModeArgs};
use super::handlers::{self, HandlerContext, scan::ScanRequest};
use super::logging;
use crate::config::Config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let Some(command) = cli.command else {
        show_guidance();
        return Ok(());
    };

    match command {
        Commands::Scan {
            path,
            join_key,
            max_bytes,
            max_lines,
            view_mode,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            let ctx = HandlerContext::new(cli.format, &view_mode);
            let request = ScanRequest {
                path,
                join_key,
                max_bytes,
                max_lines,
            };
            handlers::scan::handle(&config, request, &ctx)
        }

        Commands::Example => {
            let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
            handlers::example::handle(&ctx)
        }

        Commands::Dialects { view_mode } => {
            let config = Config::load(cli.config.as_deref())?;
            let ctx = HandlerContext::new(cli.format, &view_mode);
            handlers::dialects::handle(&config, &ctx)
        }
    }
}

fn show_guidance() {
    println!("inflight - find the dbt models that are still running\n");
    println!("Get started:");
    println!("  inflight example | inflight scan     # Try it on a sample log");
    println!("  inflight scan path/to/dbt.log        # Scan a saved log");
    println!("  pbpaste | inflight scan              # Scan a log from the clipboard\n");
    println!("For more commands:");
    println!("  inflight --help");
}
