use waymark_engine::{EditError, FrameRecorder, NoticeLevel, Step, WaypointController};
use waymark_types::{Coord, Mode, UploadTarget};

fn point(lat: f64, lng: f64) -> Coord {
    Coord::new(lat, lng).unwrap()
}

fn controller_with(points: &[(f64, f64)]) -> WaypointController<FrameRecorder> {
    let mut controller = WaypointController::new(FrameRecorder::new());
    for (lat, lng) in points {
        controller.add_point(point(*lat, *lng), None).unwrap();
    }
    controller
}

/// Every frame must agree with the mission list: one marker and one row per
/// point, in list order, with the selection highlighted everywhere.
fn assert_views_consistent(controller: &WaypointController<FrameRecorder>) {
    let points = controller.points();
    let selection = controller.state().selection();
    let screen = controller.view().screen().expect("a full frame");

    assert_eq!(screen.map.markers.len(), points.len());
    assert_eq!(screen.table.rows.len(), points.len());
    for (index, coord) in points.iter().enumerate() {
        assert_eq!(screen.map.markers[index].coord, *coord);
        assert_eq!(screen.map.markers[index].order, index + 1);
        assert_eq!(screen.table.rows[index].lat, coord.lat_text());
        assert_eq!(screen.table.rows[index].selected, selection == Some(index));
    }
    match screen.map.path.as_deref() {
        Some(path) => assert_eq!(path, points),
        None => assert!(points.len() < 2),
    }
    assert_eq!(screen.table.selected, selection);
    assert_eq!(screen.edit_panel.selected, selection);
    assert_eq!(screen.edit_panel.mode, controller.state().mode());
}

#[test]
fn test_initial_frame_is_empty() {
    let controller = WaypointController::new(FrameRecorder::new());
    assert_eq!(controller.view().render_count(), 1);
    assert!(controller.view().edit_panel().unwrap().is_cleared());
    assert_eq!(controller.state().mode(), Mode::Adding);
    assert_views_consistent(&controller);
}

#[test]
fn test_move_second_point_to_front() {
    let mut controller = controller_with(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    controller.select(1);
    assert!(controller.move_point(1, 0));

    assert_eq!(
        controller.points(),
        &[point(1.0, 1.0), point(0.0, 0.0), point(2.0, 2.0)]
    );
    assert_eq!(controller.state().selection(), Some(0));
    assert_eq!(controller.view().map().unwrap().center_on, Some(point(1.0, 1.0)));
    assert_views_consistent(&controller);
}

#[test]
fn test_delete_first_of_two() {
    let mut controller = controller_with(&[(0.0, 0.0), (1.0, 1.0)]);
    controller.select(0);
    assert!(controller.delete_point(Some(0)));

    assert_eq!(controller.points(), &[point(1.0, 1.0)]);
    assert_eq!(controller.state().selection(), Some(0));
    let panel = controller.view().edit_panel().unwrap();
    assert_eq!(panel.lat, "1.00000000");
    assert_eq!(panel.lng, "1.00000000");
    assert_views_consistent(&controller);
}

#[test]
fn test_delete_unselected_point_keeps_selection_and_view() {
    let mut controller = controller_with(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    controller.select(2);
    assert!(controller.delete_point(Some(0)));

    assert_eq!(controller.state().selected_point(), Some(point(2.0, 2.0)));
    assert_eq!(controller.view().map().unwrap().center_on, None);
    assert_views_consistent(&controller);
}

#[test]
fn test_export_uses_fixed_precision() {
    let controller = controller_with(&[(53.01907012, 20.88029023)]);
    let value: serde_json::Value = serde_json::from_str(&controller.export_json().unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"lat": "53.01907012", "lng": "20.88029023"}])
    );
}

#[test]
fn test_export_import_round_trip() {
    let source = controller_with(&[(53.0190701, 20.8802902), (-12.5, 130.25), (0.0, -0.5)]);
    let json = source.export_json().unwrap();

    let mut target = WaypointController::new(FrameRecorder::new());
    assert_eq!(target.import_json(&json), Ok(3));
    assert_eq!(target.points(), source.points());
    assert_views_consistent(&target);
}

#[test]
fn test_bad_import_leaves_mission_untouched() {
    let mut controller = controller_with(&[(5.0, 5.0), (6.0, 6.0)]);
    controller.set_mode(Mode::Editing);
    let before = controller.state().clone();

    let err = controller.import_json(r#"{"not":"an array"}"#).unwrap_err();
    assert!(matches!(err, EditError::InvalidSnapshot(_)));
    assert_eq!(controller.state(), &before);

    let notice = controller.view().last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(
        notice.message,
        "Invalid file format. Please upload a valid JSON file."
    );

    // one bad entry rejects the whole file
    assert!(controller.import_json(r#"[{"lat": 1, "lng": 1}, {"lat": "north"}]"#).is_err());
    assert_eq!(controller.state(), &before);
}

#[test]
fn test_import_replaces_list_and_keeps_mode() {
    let mut controller = controller_with(&[(5.0, 5.0)]);
    controller.set_mode(Mode::Editing);

    let imported = controller
        .import_json(r#"[{"lat": "1.5", "lng": "2.5"}, {"lat": 3, "lng": 4}]"#)
        .unwrap();

    assert_eq!(imported, 2);
    assert_eq!(controller.points(), &[point(1.5, 2.5), point(3.0, 4.0)]);
    assert_eq!(controller.state().mode(), Mode::Editing);
    assert_eq!(controller.state().selection(), Some(1));
    assert_views_consistent(&controller);

    assert_eq!(controller.import_json("[]"), Ok(0));
    assert!(controller.state().is_empty());
    assert!(controller.view().edit_panel().unwrap().is_cleared());
}

#[test]
fn test_empty_upload_never_builds_request() {
    let mut controller = WaypointController::new(FrameRecorder::new());
    assert_eq!(
        controller.prepare_upload(&UploadTarget::default()),
        Err(EditError::EmptyMission)
    );
    let notice = controller.view().last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "No points to upload.");
}

#[test]
fn test_upload_request_follows_list_order() {
    let mut controller = controller_with(&[(1.0, 2.0), (3.0, 4.0)]);
    controller.move_step(1, Step::Up);

    let target = UploadTarget {
        ip: "10.0.0.2".to_string(),
        port: "14551".to_string(),
        height: "35".to_string(),
    };
    let request = controller.prepare_upload(&target).unwrap();
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "data": [{"lat": 3.0, "lng": 4.0}, {"lat": 1.0, "lng": 2.0}],
            "ip": "10.0.0.2",
            "port": "14551",
            "height": "35"
        })
    );
}

#[test]
fn test_mixed_sequence_keeps_views_in_sync() {
    let mut controller = controller_with(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);

    controller.select(0);
    controller.place_point(point(0.5, 0.5));
    assert_views_consistent(&controller);

    controller.move_point(4, 1);
    assert_views_consistent(&controller);

    controller.set_mode(Mode::Editing);
    controller.drag_point(2, point(9.0, 9.0));
    assert_views_consistent(&controller);

    controller.update_selected_coordinates(" 7.25 ", "8").unwrap();
    assert_views_consistent(&controller);

    controller.delete_point(None);
    assert_views_consistent(&controller);

    controller.move_step(0, Step::Up);
    controller.move_step(0, Step::Down);
    assert_views_consistent(&controller);

    controller.clear_all();
    assert_views_consistent(&controller);
    assert_eq!(controller.state().mode(), Mode::Adding);
}

#[test]
fn test_table_snapshot() {
    let mut controller = controller_with(&[(53.0190701, 20.8802902), (53.025, 20.89)]);
    controller.select(0);

    let table = controller.view().table().unwrap();
    insta::assert_json_snapshot!("table_two_points_first_selected", table);
}
