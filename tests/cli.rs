//! End-to-end tests for the zenmodes binary
//!
//! Run with: cargo test --test cli

use std::path::Path;
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

const MODES: &str = r#"
[[modes]]
id = "bedtime"
name = "Bedtime"

[modes.policy]
calls = "starred"
messages = "anyone"
conversations = "anyone"
repeat_callers = false

[people]
contacts_count = 2
all_conversations = 3
important_conversations = 1
"#;

fn project() -> TempDir {
    let temp = tempdir().unwrap();
    let zen_dir = temp.path().join(".zenmodes");
    std::fs::create_dir_all(&zen_dir).unwrap();
    std::fs::write(zen_dir.join("modes.toml"), MODES).unwrap();
    temp
}

fn zenmodes(project: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_zenmodes"))
        .arg("--project")
        .arg(project)
        .args(args)
        // Keep log files inside the test directory
        .env("XDG_DATA_HOME", project.join("data"))
        .env("HOME", project)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_list_modes() {
    let project = project();
    let out = stdout(&zenmodes(project.path(), &["list"]));
    assert!(out.contains("bedtime"));
    assert!(out.contains("Some people can interrupt"));
}

#[test]
fn test_show_messages_screen_json() {
    let project = project();
    let out = stdout(&zenmodes(
        project.path(),
        &["--json", "show", "bedtime", "messages"],
    ));

    let view: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(view["mode"], "Bedtime");
    assert_eq!(view["category"], "messages");
    let checked: Vec<&str> = view["options"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|o| o["checked"] == true)
        .map(|o| o["key"].as_str().unwrap())
        .collect();
    assert_eq!(checked, vec!["senders_anyone"]);
}

#[test]
fn test_click_rewrites_modes_file() {
    let project = project();
    stdout(&zenmodes(
        project.path(),
        &["click", "bedtime", "messages", "important"],
    ));

    let saved = std::fs::read_to_string(project.path().join(".zenmodes/modes.toml")).unwrap();
    assert!(saved.contains("messages = \"none\""));
    assert!(saved.contains("conversations = \"important\""));
    assert!(saved.contains("calls = \"starred\""));
}

#[test]
fn test_click_hidden_option_fails() {
    let project = project();
    let output = zenmodes(
        project.path(),
        &["click", "bedtime", "messages", "any_conversations"],
    );
    assert!(!output.status.success());

    let saved = std::fs::read_to_string(project.path().join(".zenmodes/modes.toml")).unwrap();
    assert_eq!(saved, MODES);
}

#[test]
fn test_init_creates_config() {
    let temp = tempdir().unwrap();
    stdout(&zenmodes(temp.path(), &["init"]));
    assert!(temp.path().join(".zenmodes/config.toml").exists());
}

#[test]
fn test_broken_config_is_reported_and_defaults_used() {
    let project = project();
    std::fs::write(project.path().join(".zenmodes/config.toml"), "[store\nmodes_file = ").unwrap();

    let output = zenmodes(project.path(), &["list"]);
    let out = stdout(&output);
    assert!(out.contains("bedtime"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse"));
    assert!(stderr.contains("using default settings"));
}

#[test]
fn test_show_lists_setting_summary() {
    let project = project();
    let out = stdout(&zenmodes(project.path(), &["show", "bedtime", "messages"]));
    assert!(out.starts_with("Bedtime - messages: Anyone (Some people can interrupt)"));
}
