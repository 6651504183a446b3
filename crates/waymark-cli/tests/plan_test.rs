use waymark_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_plan_wraps_waypoints_in_takeoff_and_return() {
    let world = TestWorld::new().with_file("points.json", fixtures::TWO_POINTS);

    let result = world
        .run(&["--format", "json", "plan", "points.json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assertions::assert_plan_commands(
        &json,
        &["TAKEOFF", "WAYPOINT", "WAYPOINT", "RETURN_TO_LAUNCH"],
    )
    .unwrap();

    let content = &json["content"];
    assert_eq!(content["height"], 60.0);
    assert_eq!(content["waypoint_count"], 2);
    assert_eq!(content["items"][0]["command_id"], 22);
    assert_eq!(content["items"][1]["lat"], "53.0190701");
    assert_eq!(content["items"][1]["lng"], "20.8802902");
    assert_eq!(content["items"][3]["frame"], "MISSION");
    assert_eq!(content["items"][3]["alt"], 0.0);
    assert!(content["items"][3]["lat"].is_null());
}

#[test]
fn test_plan_height_from_flag_and_config() {
    let world = TestWorld::new()
        .with_file("points.json", fixtures::TWO_POINTS)
        .with_config("[target]\nheight = \"35\"\n");

    let from_config = world
        .run(&["--format", "json", "plan", "points.json"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(from_config["content"]["height"], 35.0);

    let from_flag = world
        .run(&["--format", "json", "plan", "points.json", "--height", "120"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(from_flag["content"]["height"], 120.0);
    assert_eq!(from_flag["content"]["items"][1]["alt"], 120.0);
}

#[test]
fn test_plan_rejects_bad_height() {
    let world = TestWorld::new().with_file("points.json", fixtures::TWO_POINTS);

    let result = world
        .run(&["plan", "points.json", "--height", "high"])
        .unwrap();
    assert!(!result.success());
    assertions::assert_contains(result.stderr(), "Please enter a valid operating height.").unwrap();
}

#[test]
fn test_plan_plain_output() {
    let world = TestWorld::new().with_file("points.json", fixtures::TWO_POINTS);

    let result = world.run(&["plan", "points.json"]).unwrap();
    assert!(result.success());
    assertions::assert_contains(
        result.stdout(),
        "Mission plan for points.json at 60 m (2 waypoint(s))",
    )
    .unwrap();
    assertions::assert_contains(result.stdout(), "RETURN_TO_LAUNCH").unwrap();
}
