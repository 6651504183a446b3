use waymark_testing::{TestWorld, assertions};

#[test]
fn test_init_writes_default_config() {
    let world = TestWorld::new();

    let result = world.run(&["init"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assertions::assert_contains(result.stdout(), "Wrote default configuration to").unwrap();
    assertions::assert_contains(result.stdout(), "http://localhost:8001/upload").unwrap();

    let config = std::fs::read_to_string(world.config_path()).unwrap();
    assert!(config.contains("[endpoint]"));
    assert!(config.contains("[target]"));
    assert!(config.contains("export_path = \"points.json\""));
}

#[test]
fn test_init_keeps_existing_config() {
    let world = TestWorld::new().with_config("[endpoint]\nport = 9000\n");

    let result = world.run(&["--format", "json", "init"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["config_status"]["status"], "loaded_existing");
    assert_eq!(json["content"]["endpoint"], "http://localhost:9000/upload");
    assert_eq!(
        std::fs::read_to_string(world.config_path()).unwrap(),
        "[endpoint]\nport = 9000\n"
    );
}

#[test]
fn test_init_force_resets_config() {
    let world = TestWorld::new().with_config("[endpoint]\nport = 9000\n");

    let result = world.run(&["--format", "json", "init", "--force"]).unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["config_status"]["status"], "overwritten");
    assert_eq!(json["content"]["endpoint"], "http://localhost:8001/upload");
}

#[test]
fn test_init_reports_malformed_config() {
    let world = TestWorld::new().with_config("[endpoint\nport = ");

    let result = world.run(&["init"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().starts_with("Error: "));
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new();

    let result = world.run(&[]).unwrap();
    assert!(result.success());
    assertions::assert_contains(result.stdout(), "waymark init").unwrap();
    assertions::assert_contains(result.stdout(), "waymark edit points.json").unwrap();
}
