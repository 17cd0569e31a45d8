use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use trustctl_testing::TestWorld;

#[test]
fn test_cli_version() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("trustctl "))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_cli_help() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config show"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("wait"));
}

#[test]
fn test_help_ignores_malformed_rest() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .args(["bogus", "--trust-home", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage:"));

    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .args(["--version", "--trust-home"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("trustctl "));
}

#[test]
fn test_help_after_command_short_circuits_it() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Usage:"));

    // init never ran
    assert!(!world.default_trust_home().exists());
}

#[test]
fn test_no_arguments_is_missing_command() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing command"))
        .stderr(predicate::str::contains("hint: try --help"));
}

#[test]
fn test_only_flags_is_missing_command() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .args(["--testing", "--trust-home=/x", "--unknown"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("missing command"));
}

#[test]
fn test_unknown_command_is_named() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .arg("bogus")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("bogus"));
}

#[test]
fn test_config_without_show_is_unknown() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .arg("config")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("unknown command: config"));
}

#[test]
fn test_trust_home_without_value() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .arg("--trust-home")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("--trust-home requires a value"));
}

#[test]
fn test_oversized_argument_rejected_anywhere() {
    let world = TestWorld::new();
    let big = "a".repeat(1025);
    let cases: Vec<Vec<String>> = vec![
        vec![big.clone()],
        vec!["config".into(), "show".into(), big.clone()],
        vec!["--testing".into(), format!("--trust-home={big}"), "init".into()],
        vec!["--help".into(), big.clone()],
        vec!["--version".into(), format!("--{big}")],
    ];

    for args in cases {
        let mut cmd = cargo_bin_cmd!("trustctl");
        world
            .configure_command(&mut cmd)
            .args(&args)
            .assert()
            .code(64)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("1024"));
    }
}

#[test]
fn test_argument_at_limit_is_accepted() {
    let world = TestWorld::new();
    let value = format!("/{}", "b".repeat(1023));
    let mut cmd = cargo_bin_cmd!("trustctl");
    world
        .configure_command(&mut cmd)
        .args(["--trust-home", value.as_str(), "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source=flag"));
}
