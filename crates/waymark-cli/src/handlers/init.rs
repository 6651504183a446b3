use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use anyhow::Result;
use std::path::Path;
use waymark_runtime::{Config, ConfigStatus, InitService};

pub fn handle(ctx: &HandlerContext, data_dir: &Path, force: bool) -> Result<()> {
    let status = InitService::run(data_dir, force)?;
    let config = Config::load_from(&data_dir.join(waymark_runtime::config::CONFIG_FILE_NAME))?;

    let badge = match &status {
        ConfigStatus::Created { .. } => StatusBadge::success("Initialized"),
        ConfigStatus::Overwritten { .. } => StatusBadge::success("Reset to defaults"),
        ConfigStatus::LoadedExisting { .. } => StatusBadge::info("Already initialized"),
    };
    let existing = matches!(status, ConfigStatus::LoadedExisting { .. });

    let view_model = presenters::present_init_result(status, data_dir, config.endpoint.url());
    let mut result = CommandResultViewModel::new(view_model).with_badge(badge);
    if existing {
        result = result.with_suggestion(
            Guidance::new("Restore the default settings").with_command("waymark init --force"),
        );
    }
    result = result.with_suggestion(Guidance::new("Open the editor").with_command("waymark edit"));

    ctx.render(result)
}
