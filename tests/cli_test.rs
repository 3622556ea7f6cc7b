//! Integration tests for the CLI binary.

use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_superset-railway-config"))
}

#[test]
fn env_command_works_without_a_secret_key() {
    // The variable reference is what an operator consults before any
    // configuration exists, so it must not require a loaded one.
    let output = bin()
        .arg("env")
        .env_remove("SUPERSET_SECRET_KEY")
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SUPERSET_SECRET_KEY"));
    assert!(stdout.contains("REDIS_URL"));
}

#[test]
fn show_fails_without_a_secret_key() {
    let output = bin()
        .arg("show")
        .env_remove("SUPERSET_SECRET_KEY")
        .output()
        .expect("run binary");

    assert!(!output.status.success());
}

#[test]
fn show_succeeds_with_a_secret_key() {
    let output = bin()
        .args(["show", "--json"])
        .env("SUPERSET_SECRET_KEY", "cli-test-secret")
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"app_name\""));
    assert!(!stdout.contains("cli-test-secret"));
}
