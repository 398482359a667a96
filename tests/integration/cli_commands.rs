//! Runs the `modpocket` binary for commands that need no network access.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_modpocket"))
        .env("HOME", home)
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("MODPOCKET_LOG")
        .current_dir(home)
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_decode_json_output() {
    let temp = TempDir::new().unwrap();
    let output = run(
        temp.path(),
        &[
            "decode",
            "--format",
            "json",
            "https://nusmods.com/timetable/sem-2/share?CS2040=LEC:(1);TUT:(3,4)",
        ],
    );
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["term"], 2);
    assert_eq!(json["moduleSelections"]["CS2040"]["TUT"][1], "4");
}

#[test]
fn test_decode_wrong_host_exits_with_user_error() {
    let temp = TempDir::new().unwrap();
    let output = run(
        temp.path(),
        &["decode", "https://other.com/timetable/sem-1/share?CS2040=LEC:1"],
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("other.com"));
}

#[test]
fn test_local_config_changes_decoder_host() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("modpocket.toml"),
        "[share_url]\nhost = \"catalog.example.com\"\nterm_marker = \"term-\"\n",
    )
    .unwrap();

    let output = run(
        temp.path(),
        &["decode", "https://catalog.example.com/timetable/term-3/share?CS101=LEC:1"],
    );
    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(stdout(&output).starts_with("Term 3\nCS101"));
}

#[test]
fn test_styles_lists_every_style() {
    let temp = TempDir::new().unwrap();
    let output = run(temp.path(), &["styles", "--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["minimalist", "gradient", "neon", "pastel", "glass", "retro", "kawaii"]
    );
}

#[test]
fn test_config_show_redacts_token() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("custom.toml");
    fs::write(
        &config_path,
        "[imagen]\nproject = \"demo\"\naccess_token = \"ya29.top-secret\"\n",
    )
    .unwrap();

    let output = run(
        temp.path(),
        &["--config", config_path.to_str().unwrap(), "config", "show"],
    );
    assert!(output.status.success(), "stderr={}", stderr(&output));
    let shown = stdout(&output);
    assert!(shown.contains("project = \"demo\""));
    assert!(!shown.contains("top-secret"));
}

#[test]
fn test_bad_aspect_ratio_is_rejected_before_lookup() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("modpocket.toml"),
        "[catalog]\nbase_url = \"http://127.0.0.1:9\"\ntimeout_secs = 1\n",
    )
    .unwrap();

    let output = run(
        temp.path(),
        &[
            "prompt",
            "--aspect-ratio",
            "2:1",
            "https://nusmods.com/timetable/sem-1/share?CS2040=LEC:1",
        ],
    );
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Unsupported aspect ratio"));
}
