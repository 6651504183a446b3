use std::fmt;

use crate::presentation::view_models::{MissionPlanViewModel, WaypointListViewModel};

// --------------------------------------------------------
// Waypoint table
// --------------------------------------------------------

impl fmt::Display for WaypointListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Mission: {}", self.source)?;

        if self.waypoints.is_empty() {
            writeln!(f, "No waypoints.")?;
            return Ok(());
        }

        writeln!(f, "{:<6} {:<16} LNG", "#", "LAT")?;
        writeln!(f, "{}", "-".repeat(40))?;
        for row in &self.waypoints {
            writeln!(f, "{:<6} {:<16} {}", row.position, row.lat, row.lng)?;
        }
        writeln!(f)?;
        writeln!(f, "{} waypoint(s)", self.count)?;

        Ok(())
    }
}

// --------------------------------------------------------
// Mission plan
// --------------------------------------------------------

impl fmt::Display for MissionPlanViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Mission plan for {} at {} m ({} waypoint(s))",
            self.source, self.height, self.waypoint_count
        )?;
        writeln!(
            f,
            "{:<5} {:<18} {:<5} {:<20} {:<12} {:<12} ALT",
            "SEQ", "COMMAND", "ID", "FRAME", "LAT", "LNG"
        )?;
        writeln!(f, "{}", "-".repeat(84))?;

        for item in &self.items {
            writeln!(
                f,
                "{:<5} {:<18} {:<5} {:<20} {:<12} {:<12} {}",
                item.seq,
                item.command,
                item.command_id,
                item.frame,
                item.lat.as_deref().unwrap_or("-"),
                item.lng.as_deref().unwrap_or("-"),
                item.alt
            )?;
        }

        Ok(())
    }
}
