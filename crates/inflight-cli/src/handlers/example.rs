use super::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

/// A build caught mid-run: tasks 4, 5, 6, 10 and 11 never finish, and the
/// `of 10` denominator becomes `of 12` partway through
pub const EXAMPLE_LOG: &str = include_str!("../../assets/example.log");

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_example(EXAMPLE_LOG))
}
