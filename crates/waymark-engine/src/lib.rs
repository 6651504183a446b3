// Engine module - Waypoint list controller and everything derived from it
// This layer sits between plain coordinates (types) and the hosts that draw them

pub mod controller;
pub mod error;
pub mod mission;
pub mod presenter;
pub mod selection;
pub mod snapshot;
mod state;
pub mod view;
pub mod view_models;

pub use controller::WaypointController;
pub use error::{EditError, Result};
pub use mission::{build_mission_plan, parse_height};
pub use presenter::build_screen;
pub use selection::{Selection, Step};
pub use snapshot::{EXPORT_FILE_NAME, parse_snapshot, to_json};
pub use state::MissionState;
pub use view::{FrameRecorder, MissionView, Notice, NoticeLevel};
pub use view_models::{
    EditPanelViewModel, MapViewModel, MarkerViewModel, PopupViewModel, ScreenViewModel,
    TableRowViewModel, TableViewModel,
};

use waymark_types::{Coord, MissionPlan};

// Façade API - Stable public interface for CLI layer
// Non-interactive commands use these instead of driving a controller

/// Load an import document into a headless controller
pub fn load_mission(text: &str) -> Result<WaypointController<FrameRecorder>> {
    let mut controller = WaypointController::new(FrameRecorder::new());
    controller.import_json(text)?;
    Ok(controller)
}

/// Parse an import document and expand it into the uploaded mission plan
pub fn plan_from_snapshot(text: &str, height: &str) -> Result<MissionPlan> {
    let points: Vec<Coord> = parse_snapshot(text)?;
    build_mission_plan(&points, height)
}
