//! Snapshot files on disk: the export document and import sources.

use std::path::{Path, PathBuf};

use tracing::info;
use waymark_engine::{MissionView, WaypointController};

use crate::Result;

/// Read an import document; validation happens in the controller
pub fn read_snapshot(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Write the current mission as an export document and return the path used
pub fn export_to<V: MissionView>(
    controller: &WaypointController<V>,
    path: &Path,
) -> Result<PathBuf> {
    let json = controller.export_json()?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    info!(path = %path.display(), points = controller.points().len(), "mission exported");
    Ok(path.to_path_buf())
}

/// Read `path` and replace the mission with its contents.
///
/// A file that cannot be read is an IO error; a file that reads but is not a
/// valid snapshot is reported through the views and leaves the mission as is.
pub fn import_from<V: MissionView>(
    controller: &mut WaypointController<V>,
    path: &Path,
) -> Result<usize> {
    let text = read_snapshot(path)?;
    let count = controller.import_json(&text)?;
    info!(path = %path.display(), points = count, "mission imported");
    Ok(count)
}
