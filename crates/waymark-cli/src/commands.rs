use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use anyhow::Result;
use waymark_runtime::{LogTarget, Workspace, init_logging, resolve_workspace_path};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = HandlerContext::new(cli.format);
    let level = cli.log_level.to_filter();

    let Some(command) = cli.command else {
        let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
        return handlers::guidance::handle(&ctx, &data_dir);
    };

    match command {
        Commands::Init { force } => {
            init_logging(level, LogTarget::Stderr)?;
            let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
            handlers::init::handle(&ctx, &data_dir, force)
        }

        // the editor owns the terminal, so its log goes to the data directory
        Commands::Edit { file, target } => {
            let workspace = Workspace::open(cli.data_dir.as_deref())?;
            init_logging(level, LogTarget::File(&workspace.log_path()))?;
            handlers::edit::handle(workspace.into_config(), file, target)
        }

        Commands::Show { file } => {
            init_logging(level, LogTarget::Stderr)?;
            handlers::show::handle(&ctx, &file)
        }

        Commands::Plan { file, height } => {
            init_logging(level, LogTarget::Stderr)?;
            let workspace = Workspace::open(cli.data_dir.as_deref())?;
            handlers::plan::handle(&ctx, workspace.config(), &file, height)
        }

        Commands::Upload {
            file,
            target,
            endpoint,
        } => {
            init_logging(level, LogTarget::Stderr)?;
            let workspace = Workspace::open(cli.data_dir.as_deref())?;
            handlers::upload::handle(&ctx, workspace.into_config(), &file, target, endpoint)
        }
    }
}
