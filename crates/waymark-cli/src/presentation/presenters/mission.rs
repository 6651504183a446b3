use waymark_engine::TableViewModel;
use waymark_types::{MissionCommand, MissionPlan};

use crate::presentation::view_models::{
    MissionPlanViewModel, PlanItemRow, WaypointListViewModel, WaypointRow,
};

pub fn present_waypoint_list(source: &str, table: &TableViewModel) -> WaypointListViewModel {
    let waypoints: Vec<WaypointRow> = table
        .rows
        .iter()
        .map(|row| WaypointRow {
            position: row.position,
            lat: row.lat.clone(),
            lng: row.lng.clone(),
        })
        .collect();

    WaypointListViewModel {
        source: source.to_string(),
        count: waypoints.len(),
        waypoints,
    }
}

pub fn present_mission_plan(source: &str, plan: &MissionPlan) -> MissionPlanViewModel {
    let items = plan
        .items
        .iter()
        .map(|item| {
            let located = item.command == MissionCommand::Waypoint;
            PlanItemRow {
                seq: item.seq,
                command: item.command.to_string(),
                command_id: item.command_id,
                frame: item.frame.to_string(),
                lat: located.then(|| unscale(item.x)),
                lng: located.then(|| unscale(item.y)),
                alt: item.z,
            }
        })
        .collect();

    MissionPlanViewModel {
        source: source.to_string(),
        height: plan.height,
        waypoint_count: plan.waypoint_count(),
        items,
    }
}

fn unscale(value: i32) -> String {
    format!("{:.7}", value as f64 / 1e7)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_engine::{build_mission_plan, presenter::build_table};
    use waymark_types::Coord;

    #[test]
    fn test_plan_rows_hide_location_for_takeoff_and_rtl() {
        let points = [Coord::new(53.0190701, 20.8802902).unwrap()];
        let plan = build_mission_plan(&points, "60").unwrap();
        let view = present_mission_plan("points.json", &plan);

        assert_eq!(view.items.len(), 3);
        assert_eq!(view.items[0].command, "TAKEOFF");
        assert!(view.items[0].lat.is_none());
        assert_eq!(view.items[1].lat.as_deref(), Some("53.0190701"));
        assert_eq!(view.items[1].lng.as_deref(), Some("20.8802902"));
        assert_eq!(view.items[2].command_id, 20);
    }

    #[test]
    fn test_waypoint_list_counts_rows() {
        let points = [Coord::new(1.0, 2.0).unwrap(), Coord::new(3.0, 4.0).unwrap()];
        let table = build_table(&points, None);
        let view = present_waypoint_list("a.json", &table);
        assert_eq!(view.count, 2);
        assert_eq!(view.waypoints[1].position, 2);
        assert_eq!(view.waypoints[1].lng, "4.00000000");
    }
}
