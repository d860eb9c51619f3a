use std::fs;
use std::path::Path;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const SIGNUP: &str = r#"{
  "blocks": [
    { "type": "section", "text": { "type": "mrkdwn", "text": "<{{ url_link }}|{{ user_name }}>" } }
  ]
}"#;

fn aeolic_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("aeolic"));
    cmd.env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("SLACK_API_TOKEN")
        .env_remove("SLACK_CHANNEL")
        .env_remove("SLACK_TEMPLATE_FOLDER")
        .env_remove("RUST_LOG");
    cmd
}

fn template_dir() -> TempDir {
    let dir = TempDir::new().expect("template dir");
    fs::write(dir.path().join("signup.tmpl"), SIGNUP).expect("write signup");
    fs::write(dir.path().join("plain.tmpl"), r#"{"text": "deploy finished"}"#).expect("write plain");
    fs::write(dir.path().join("notes.md"), "not a template").expect("write notes");
    dir
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_prints_envelope_with_channel() {
    let home = TempDir::new().expect("home");
    let templates = template_dir();

    let output = aeolic_cmd(home.path())
        .args(["render", "signup", "--channel", "C0123", "--templates"])
        .arg(templates.path())
        .args(["--data", r#"{"url_link":"https://x.io","user_name":"ada"}"#])
        .output()
        .expect("run aeolic render");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(body["channel"], "C0123");
    assert_eq!(body["blocks"][0]["text"]["text"], "<https://x.io|ada>");
}

#[test]
fn render_reads_template_dir_from_env() {
    let home = TempDir::new().expect("home");
    let templates = template_dir();

    aeolic_cmd(home.path())
        .env("SLACK_TEMPLATE_FOLDER", templates.path())
        .args(["render", "plain"])
        .assert()
        .success()
        .stdout(contains(r#""channel": "preview""#))
        .stdout(contains("deploy finished"));
}

#[test]
fn render_with_missing_field_fails() {
    let home = TempDir::new().expect("home");
    let templates = template_dir();

    aeolic_cmd(home.path())
        .args(["render", "signup", "--templates"])
        .arg(templates.path())
        .args(["--data", r#"{"url_link":"https://x.io"}"#])
        .assert()
        .failure()
        .stderr(contains("user_name"));
}

#[test]
fn render_uses_settings_file() {
    let home = TempDir::new().expect("home");
    let templates = template_dir();
    let settings_dir = home.path().join(".aeolic");
    fs::create_dir_all(&settings_dir).expect("settings dir");
    fs::write(
        settings_dir.join("config.yaml"),
        format!("channel: C-SETTINGS\ntemplate_dir: {}\n", templates.path().display()),
    )
    .expect("write settings");

    aeolic_cmd(home.path())
        .args(["render", "plain"])
        .assert()
        .success()
        .stdout(contains("C-SETTINGS"));
}

// ---------------------------------------------------------------------------
// templates
// ---------------------------------------------------------------------------

#[test]
fn templates_json_lists_sorted_names() {
    let home = TempDir::new().expect("home");
    let templates = template_dir();

    let output = aeolic_cmd(home.path())
        .args(["templates", "--json", "--templates"])
        .arg(templates.path())
        .output()
        .expect("run aeolic templates");
    assert!(output.status.success());

    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).expect("json");
    let names: Vec<_> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["plain", "signup"]);
}

#[test]
fn templates_table_output() {
    let home = TempDir::new().expect("home");
    let templates = template_dir();

    aeolic_cmd(home.path())
        .args(["templates", "--templates"])
        .arg(templates.path())
        .assert()
        .success()
        .stdout(contains("signup"))
        .stdout(contains("2 template(s)"));
}

#[test]
fn missing_template_dir_fails() {
    let home = TempDir::new().expect("home");

    aeolic_cmd(home.path())
        .args(["templates", "--templates"])
        .arg(home.path().join("nope"))
        .assert()
        .failure()
        .stderr(contains("failed to load templates"));
}

// ---------------------------------------------------------------------------
// send
// ---------------------------------------------------------------------------

#[test]
fn send_without_token_fails_early() {
    let home = TempDir::new().expect("home");
    let templates = template_dir();

    aeolic_cmd(home.path())
        .args(["send", "plain", "--channel", "C1", "--templates"])
        .arg(templates.path())
        .assert()
        .failure()
        .stderr(contains("no API token"));
}

#[test]
fn send_to_unreachable_endpoint_fails() {
    let home = TempDir::new().expect("home");
    let templates = template_dir();

    aeolic_cmd(home.path())
        .env("SLACK_API_TOKEN", "xoxb-test")
        .args(["send", "plain", "--channel", "C1", "--endpoint", "http://127.0.0.1:9/api"])
        .arg("--templates")
        .arg(templates.path())
        .assert()
        .failure()
        .stderr(contains("failed to send 'plain' to C1"));
}
