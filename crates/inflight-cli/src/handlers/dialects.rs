use super::HandlerContext;
use crate::config::Config;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(config: &Config, ctx: &HandlerContext) -> Result<()> {
    let parser = config.parser()?;
    let view_model = presenters::present_dialects(parser.dialects());
    ctx.render(view_model)
}
