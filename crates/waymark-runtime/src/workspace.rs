use std::path::{Path, PathBuf};

use tracing::debug;

use crate::Result;
use crate::config::{CONFIG_FILE_NAME, Config, resolve_workspace_path};
use crate::logging::LOG_FILE_NAME;

/// Data directory plus the configuration loaded from it
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
}

impl Workspace {
    pub fn open(explicit_path: Option<&str>) -> Result<Self> {
        let data_dir = resolve_workspace_path(explicit_path)?;
        let config = Config::load_from(&data_dir.join(CONFIG_FILE_NAME))?;
        debug!(data_dir = %data_dir.display(), "workspace opened");
        Ok(Self { data_dir, config })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE_NAME)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// What `init` did with the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    Created { config_path: PathBuf },
    Overwritten { config_path: PathBuf },
    LoadedExisting { config_path: PathBuf },
}

pub struct InitService;

impl InitService {
    /// Write a default `config.toml` unless one exists (or `force` is set)
    pub fn run(data_dir: &Path, force: bool) -> Result<ConfigStatus> {
        let config_path = data_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() && !force {
            // surface a malformed file now rather than on the next run
            Config::load_from(&config_path)?;
            return Ok(ConfigStatus::LoadedExisting { config_path });
        }

        let existed = config_path.exists();
        Config::default().save_to(&config_path)?;
        if existed {
            Ok(ConfigStatus::Overwritten { config_path })
        } else {
            Ok(ConfigStatus::Created { config_path })
        }
    }
}
