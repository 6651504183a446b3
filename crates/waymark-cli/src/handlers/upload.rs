use super::HandlerContext;
use super::context::user_error;
use crate::args::TargetArgs;
use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::info;
use waymark_runtime::{Config, UploadClient, read_snapshot};

pub fn handle(
    ctx: &HandlerContext,
    config: Config,
    file: &Path,
    target: TargetArgs,
    endpoint: Option<String>,
) -> Result<()> {
    let config = config.with_target_overrides(target.ip, target.port, target.height);
    let text = read_snapshot(file).with_context(|| format!("Could not read {}", file.display()))?;

    // same guards as the editor: a bad file or an empty mission never reaches the network
    let mut controller = waymark_engine::load_mission(&text).map_err(user_error)?;
    let request = controller
        .prepare_upload(&config.target)
        .map_err(user_error)?;

    let client = match endpoint {
        Some(url) => UploadClient::for_url(url, config.endpoint.timeout_secs)?,
        None => UploadClient::new(&config.endpoint)?,
    };
    info!(url = client.url(), waypoints = request.data.len(), "uploading mission");

    let report = client.upload(&request);
    let success = report.outcome.is_success();
    let url = report.url.clone();

    let view_model = presenters::present_upload_report(&report);
    let result = if success {
        CommandResultViewModel::new(view_model).with_badge(StatusBadge::success("Uploaded"))
    } else {
        CommandResultViewModel::new(view_model)
            .with_badge(StatusBadge::error("Upload failed"))
            .with_suggestion(
                Guidance::new("Check the endpoint in config.toml or pass one explicitly")
                    .with_command(format!("waymark upload {} --endpoint <url>", file.display())),
            )
    };
    ctx.render(result)?;

    if !success {
        bail!("upload to {} failed", url);
    }
    Ok(())
}
