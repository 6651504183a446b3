use super::HandlerContext;
use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use anyhow::Result;
use std::path::Path;
use waymark_runtime::config::CONFIG_FILE_NAME;

pub fn handle(ctx: &HandlerContext, data_dir: &Path) -> Result<()> {
    let config_exists = data_dir.join(CONFIG_FILE_NAME).exists();
    let view_model = presenters::present_guidance(data_dir, config_exists);
    ctx.render(CommandResultViewModel::new(view_model))
}
