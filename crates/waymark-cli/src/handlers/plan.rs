use super::HandlerContext;
use super::context::user_error;
use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;
use waymark_runtime::{Config, read_snapshot};

pub fn handle(
    ctx: &HandlerContext,
    config: &Config,
    file: &Path,
    height: Option<String>,
) -> Result<()> {
    let height = height.unwrap_or_else(|| config.target.height.clone());
    let text = read_snapshot(file).with_context(|| format!("Could not read {}", file.display()))?;

    let plan = waymark_engine::plan_from_snapshot(&text, &height).map_err(user_error)?;
    debug!(items = plan.items.len(), height = plan.height, "mission plan built");

    let source = file.display().to_string();
    let view_model = presenters::present_mission_plan(&source, &plan);
    ctx.render(CommandResultViewModel::new(view_model))
}
