use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct UploadResultViewModel {
    pub url: String,
    pub waypoints: usize,
    pub success: bool,
    /// HTTP status when the server answered with an error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub message: String,
    pub finished_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConfigStatus {
    Created { config_path: String },
    Overwritten { config_path: String },
    LoadedExisting { config_path: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct InitResultViewModel {
    pub config_status: ConfigStatus,
    pub data_dir: String,
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub config_exists: bool,
}
