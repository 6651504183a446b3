pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod upload;
pub mod workspace;

pub use config::{Config, EndpointConfig, FilesConfig, MapConfig, resolve_workspace_path};
pub use error::{Error, Result};
pub use files::{export_to, import_from, read_snapshot};
pub use logging::{LogTarget, init_logging};
pub use upload::{UploadClient, UploadOutcome, UploadReport, spawn_upload};
pub use workspace::{ConfigStatus, InitService, Workspace};

// Re-export so hosts can name log levels without a direct dependency
pub use tracing_subscriber::filter::LevelFilter;
