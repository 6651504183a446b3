use crate::args::TargetArgs;
use crate::presentation::renderers::tui::{self, EditorOptions};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;
use waymark_runtime::config::expand_tilde;
use waymark_runtime::{Config, UploadClient};

pub fn handle(config: Config, file: Option<PathBuf>, target: TargetArgs) -> Result<()> {
    let config = config.with_target_overrides(target.ip, target.port, target.height);
    let client = UploadClient::new(&config.endpoint)?;
    let export_path = expand_tilde(&config.files.export_path.to_string_lossy());

    info!(endpoint = client.url(), export = %export_path.display(), "starting editor");

    tui::run(EditorOptions {
        initial_file: file,
        target: config.target,
        map: config.map,
        export_path,
        client,
    })
}
