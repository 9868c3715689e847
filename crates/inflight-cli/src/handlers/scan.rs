use super::HandlerContext;
use crate::args::JoinKeyArg;
use crate::config::Config;
use crate::input::InputSource;
use crate::presentation::presenters;
use anyhow::Result;
use inflight_engine::find_open_tasks;
use std::path::PathBuf;

/// Command-line overrides for one scan; `None` keeps the config value
#[derive(Debug, Default)]
pub struct ScanRequest {
    pub path: Option<PathBuf>,
    pub join_key: Option<JoinKeyArg>,
    pub max_bytes: Option<usize>,
    pub max_lines: Option<usize>,
}

pub fn handle(config: &Config, request: ScanRequest, ctx: &HandlerContext) -> Result<()> {
    let mut config = config.clone();
    if let Some(join_key) = request.join_key {
        config.join_key = join_key.into();
    }
    if let Some(max_bytes) = request.max_bytes {
        config.limits.max_input_bytes = max_bytes;
    }
    if let Some(max_lines) = request.max_lines {
        config.limits.max_lines = max_lines;
    }

    let options = config.options()?;
    let source = InputSource::from_arg(request.path);
    let text = source.read(config.limits.max_input_bytes)?;

    let report = find_open_tasks(&text, &options)?;
    tracing::info!(
        source = %source,
        open = report.open_count(),
        join_key = %config.join_key,
        "scan complete"
    );

    let view_model = presenters::present_scan(&source.to_string(), report);
    ctx.render(view_model)
}
