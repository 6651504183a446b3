use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WaypointRow {
    pub position: usize,
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WaypointListViewModel {
    pub source: String,
    pub count: usize,
    pub waypoints: Vec<WaypointRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanItemRow {
    pub seq: u16,
    pub command: String,
    pub command_id: u16,
    pub frame: String,
    /// Absent for items that do not target a location
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub alt: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MissionPlanViewModel {
    pub source: String,
    pub height: f32,
    pub waypoint_count: usize,
    pub items: Vec<PlanItemRow>,
}
