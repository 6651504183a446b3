use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use waymark_types::{Coord, UploadTarget};

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. WAYMARK_PATH environment variable (with tilde expansion)
/// 3. XDG data directory (recommended default)
/// 4. ~/.waymark (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("WAYMARK_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("waymark"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".waymark"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Where missions are POSTed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub timeout_secs: u64,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8001,
            path: "/upload".to_string(),
            timeout_secs: 30,
        }
    }
}

impl EndpointConfig {
    pub fn url(&self) -> String {
        let path = self.path.trim_start_matches('/');
        format!("http://{}:{}/{}", self.host, self.port, path)
    }
}

/// Initial map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 53.0190701,
            center_lng: 20.8802902,
            zoom: 13,
        }
    }
}

impl MapConfig {
    /// Configured centre, falling back to the default when out of range
    pub fn center(&self) -> Coord {
        let valid = self.center_lat.abs() <= 90.0 && self.center_lng.abs() <= 180.0;
        match Coord::new(self.center_lat, self.center_lng) {
            Ok(coord) if valid => coord,
            _ => {
                let fallback = MapConfig::default();
                Coord {
                    lat: fallback.center_lat,
                    lng: fallback.center_lng,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Export target, relative paths resolve against the working directory
    pub export_path: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(waymark_engine::EXPORT_FILE_NAME),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub target: UploadTarget,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Command-line overrides for the upload target
    pub fn with_target_overrides(
        mut self,
        ip: Option<String>,
        port: Option<String>,
        height: Option<String>,
    ) -> Self {
        if let Some(ip) = ip {
            self.target.ip = ip;
        }
        if let Some(port) = port {
            self.target.port = port;
        }
        if let Some(height) = height {
            self.target.height = height;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.endpoint.url(), "http://localhost:8001/upload");
        assert_eq!(config.target, UploadTarget::default());
        assert_eq!(config.map.zoom, 13);
        assert_eq!(config.files.export_path, PathBuf::from("points.json"));
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.endpoint.port = 9000;
        config.target.height = "45".to_string();

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[target]\nip = \"192.168.1.7\"\n\n[endpoint]\ntimeout_secs = 5\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.target.ip, "192.168.1.7");
        assert_eq!(config.target.port, "14550");
        assert_eq!(config.endpoint.timeout_secs, 5);
        assert_eq!(config.endpoint.host, "localhost");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_malformed_config_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[endpoint\nport = ")?;

        assert!(matches!(Config::load_from(&config_path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_endpoint_url_normalizes_path() {
        let endpoint = EndpointConfig {
            host: "10.0.0.5".to_string(),
            port: 8080,
            path: "mission".to_string(),
            timeout_secs: 1,
        };
        assert_eq!(endpoint.url(), "http://10.0.0.5:8080/mission");
    }

    #[test]
    fn test_target_overrides() {
        let config =
            Config::default().with_target_overrides(None, Some("14551".to_string()), None);
        assert_eq!(config.target.ip, "127.0.0.1");
        assert_eq!(config.target.port, "14551");
    }

    #[test]
    fn test_out_of_range_center_falls_back() {
        let map = MapConfig {
            center_lat: 123.0,
            center_lng: 0.0,
            zoom: 3,
        };
        assert_eq!(map.center().lat, 53.0190701);
    }

    #[test]
    fn test_explicit_workspace_path_wins() -> Result<()> {
        let path = resolve_workspace_path(Some("/tmp/waymark-explicit"))?;
        assert_eq!(path, PathBuf::from("/tmp/waymark-explicit"));
        Ok(())
    }
}
