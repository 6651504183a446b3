use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_main_help_lists_commands() {
    let mut cmd = cargo_bin_cmd!("waymark");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Build waypoint missions"))
        .stdout(predicate::str::contains("edit"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_upload_help_lists_target_flags() {
    let mut cmd = cargo_bin_cmd!("waymark");
    cmd.args(["upload", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--ip"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--height"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_unknown_command_fails() {
    let mut cmd = cargo_bin_cmd!("waymark");
    cmd.arg("fly").assert().failure();
}
