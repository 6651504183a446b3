use super::HandlerContext;
use super::context::user_error;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance};
use anyhow::{Context, Result};
use std::path::Path;
use waymark_engine::presenter::build_table;
use waymark_runtime::read_snapshot;

pub fn handle(ctx: &HandlerContext, file: &Path) -> Result<()> {
    let text = read_snapshot(file).with_context(|| format!("Could not read {}", file.display()))?;
    let controller = waymark_engine::load_mission(&text).map_err(user_error)?;

    let table = build_table(controller.points(), controller.state().selection());
    let source = file.display().to_string();
    let view_model = presenters::present_waypoint_list(&source, &table);

    let mut result = CommandResultViewModel::new(view_model);
    if controller.points().is_empty() {
        result = result.with_suggestion(
            Guidance::new("Add waypoints in the editor")
                .with_command(format!("waymark edit {}", source)),
        );
    }
    ctx.render(result)
}
