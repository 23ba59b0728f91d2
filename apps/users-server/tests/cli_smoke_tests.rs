//! CLI smoke tests for the users-server binary
//!
//! These tests verify that the CLI commands work correctly, including
//! configuration validation, help output, and basic command functionality.

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

/// Helper to run the users-server binary with given arguments
fn run_users_server(args: &[&str], home: &TempDir) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_users-server"))
        .args(args)
        .env("HOME", home.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute users-server")
}

/// Helper to run the users-server binary with timeout
async fn run_users_server_with_timeout(
    args: &[&str],
    home: &TempDir,
    timeout_duration: Duration,
) -> Result<std::process::Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_users-server"));
    cmd.args(args)
        .env("HOME", home.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    match timeout(timeout_duration, cmd.output()).await {
        Ok(result) => result.map_err(|e| e.into()),
        Err(elapsed) => Err(elapsed.into()),
    }
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_str().unwrap().to_string()
}

fn minimal_config(home: &TempDir, port: u16) -> String {
    format!(
        r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: {port}

logging:
  default:
    console_level: info
    file: ""
"#,
        home.path().display()
    )
}

#[test]
fn test_cli_help_command() {
    let home = TempDir::new().unwrap();
    let output = run_users_server(&["--help"], &home);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("users-server"), "Should contain binary name");
    assert!(stdout.contains("Usage:"), "Should contain usage information");
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--print-config"), "Should mention print-config");
}

#[test]
fn test_cli_version_command() {
    let home = TempDir::new().unwrap();
    let output = run_users_server(&["--version"], &home);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("users-server"), "Should contain binary name");
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let home = TempDir::new().unwrap();
    let output = run_users_server(&["invalid-command"], &home);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("unrecognized"),
        "Should contain error message about invalid command"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let home = TempDir::new().unwrap();
    let output = run_users_server(&["--config", "/nonexistent/config.yaml", "check"], &home);

    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("config file not found"),
        "Should mention config file issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_flag_short_form() {
    let home = TempDir::new().unwrap();
    let output = run_users_server(&["-c", "/nonexistent/config.yaml", "check"], &home);

    assert!(
        !output.status.success(),
        "Should fail with missing config file"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let home = TempDir::new().unwrap();
    let config_path = write_config(&home, "invalid.yaml", "invalid: yaml: content: [unclosed");

    let output = run_users_server(&["--config", &config_path, "check"], &home);

    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse config file"),
        "Should mention YAML parsing issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_valid_config() {
    let home = TempDir::new().unwrap();
    let config_path = write_config(&home, "valid.yaml", &minimal_config(&home, 8087));

    let output = run_users_server(&["--config", &config_path, "check"], &home);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success(), "Should succeed with valid config");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration check passed"));
    assert!(stdout.contains("port: 8087"));
}

#[test]
fn test_cli_check_rejects_bad_module_config() {
    let home = TempDir::new().unwrap();
    let content = format!(
        "{}\nmodules:\n  users_info:\n    bio_min_chars: 500\n",
        minimal_config(&home, 8088)
    );
    let config_path = write_config(&home, "bad-module.yaml", &content);

    let output = run_users_server(&["--config", &config_path, "check"], &home);

    assert!(!output.status.success(), "Inverted bounds should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bio_min_chars"), "{}", stderr);
}

#[test]
fn test_cli_print_config_applies_port_override() {
    let home = TempDir::new().unwrap();
    let config_path = write_config(&home, "print.yaml", &minimal_config(&home, 8089));

    let output = run_users_server(
        &["--config", &config_path, "--port", "9099", "--print-config"],
        &home,
    );

    assert!(output.status.success(), "print-config should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 9099"), "{}", stdout);
}

#[test]
fn test_cli_subcommand_help() {
    let home = TempDir::new().unwrap();

    let output = run_users_server(&["run", "--help"], &home);
    assert!(output.status.success(), "Run subcommand help should succeed");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Start the server"));

    let output = run_users_server(&["check", "--help"], &home);
    assert!(output.status.success(), "Check subcommand help should succeed");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Check configuration"));
}

#[tokio::test]
async fn test_cli_run_command_starts_server() {
    let home = TempDir::new().unwrap();
    let config_path = write_config(&home, "run.yaml", &minimal_config(&home, 0));

    // Server should keep running until the timeout kills it
    let result = run_users_server_with_timeout(
        &["--config", &config_path, "run"],
        &home,
        Duration::from_secs(3),
    )
    .await;

    match result {
        Err(err) => assert!(
            err.to_string().contains("elapsed"),
            "Server failed to start: {}",
            err
        ),
        Ok(output) => panic!(
            "Server exited early: {}",
            String::from_utf8_lossy(&output.stderr)
        ),
    }
}
