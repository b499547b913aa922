//! Integration tests for the `xul` binary.

use std::{fs, path::Path};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

const PAGE: &str = r#"<page>
  <h1>Team</h1>
  <grid class="people">
    <head>
      <column key="name" title="Name"/>
      <column key="age" title="Age"/>
    </head>
    <row>
      <cell key="name" value="{{ people.0.name }}"/>
      <cell key="age" value="{{ people.0.age }}"/>
    </row>
  </grid>
</page>"#;

const DATA: &str = r#"
[[people]]
name = "Ada"
age = 36
"#;

/// A `xul` command isolated from the user's config and environment.
fn xul(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("xul");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("XUL_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("page.xul"), PAGE).unwrap();
    fs::write(dir.path().join("data.toml"), DATA).unwrap();
    dir
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("tags"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn render_prints_html() {
    let dir = workspace();
    xul(dir.path())
        .current_dir(dir.path())
        .args(["render", "page.xul", "--data", "data.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<table class=\"people\">"))
        .stdout(predicate::str::contains("<th>Name</th><th>Age</th>"))
        .stdout(predicate::str::contains("<td>Ada</td><td>36</td>"));
}

#[test]
fn render_json_includes_grid() {
    let dir = workspace();
    let assert = xul(dir.path())
        .current_dir(dir.path())
        .args(["render", "page.xul", "-d", "data.toml", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["grid"]["columns"][1]["key"], "age");
    assert_eq!(value["grid"]["rows"][1]["cells"][0]["content"], "Ada");
    assert!(value["html"].as_str().unwrap().contains("<table"));
}

#[test]
fn render_reads_stdin() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .args(["render", "-"])
        .write_stdin("<p>Hello <b>world</b></p>")
        .assert()
        .success()
        .stdout(predicate::str::diff("Hello world\n"));
}

#[test]
fn render_writes_output_file() {
    let dir = workspace();
    xul(dir.path())
        .current_dir(dir.path())
        .args(["render", "page.xul", "-d", "data.toml", "-o", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered to"));

    let html = fs::read_to_string(dir.path().join("page.html")).unwrap();
    assert!(html.contains("<td>Ada</td>"));
}

#[test]
fn strict_render_reports_unknown_tag_with_location() {
    let dir = workspace();
    xul(dir.path())
        .current_dir(dir.path())
        .args(["render", "page.xul", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No renderer registered for <page>"))
        .stderr(predicate::str::contains("(at page[0])"));
}

#[test]
fn strict_can_come_from_environment() {
    let dir = workspace();
    xul(dir.path())
        .current_dir(dir.path())
        .env("XUL_RENDER__STRICT", "true")
        .args(["render", "page.xul"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No renderer registered"));
}

#[test]
fn missing_markup_file_exits_3() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .current_dir(dir.path())
        .args(["render", "absent.xul"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn malformed_markup_exits_2() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .args(["render", "-"])
        .write_stdin("<grid><head></grid>")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid markup at byte 12"));
}

#[test]
fn grid_misuse_names_the_cell() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .args(["render", "-"])
        .write_stdin(r#"<grid><row><cell key="ghost" value="x"/></row></grid>"#)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("column 'ghost'"))
        .stderr(predicate::str::contains("grid[0]/row[0]/cell[0]"));
}

#[test]
fn unsupported_data_file_is_a_user_error() {
    let dir = workspace();
    fs::write(dir.path().join("data.yaml"), "title: x").unwrap();
    xul(dir.path())
        .current_dir(dir.path())
        .args(["render", "page.xul", "--data", "data.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(".json or .toml"));
}

#[test]
fn tags_lists_builtin_controls() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .arg("tags")
        .assert()
        .success()
        .stdout(predicate::str::contains("block"))
        .stdout(predicate::str::contains("column"))
        .stdout(predicate::str::contains("head"));
}

#[test]
fn tags_json_survives_quiet() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .args(["-q", "tags", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "[\"block\",\"cell\",\"column\",\"grid\",\"head\",\"row\"]\n",
        ));
}

#[test]
fn check_reports_and_strict_fails() {
    let dir = workspace();
    xul(dir.path())
        .current_dir(dir.path())
        .args(["check", "page.xul"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<page>"))
        .stdout(predicate::str::contains("h1, page"));

    xul(dir.path())
        .current_dir(dir.path())
        .args(["check", "page.xul", "--strict"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tags: h1, page"));
}

#[test]
fn init_writes_config_that_render_uses() {
    let dir = workspace();
    let config = dir.path().join("conf").join("xul.toml");

    xul(dir.path())
        .args(["--config", config.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(config.exists());

    xul(dir.path())
        .args(["--config", config.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    fs::write(&config, "[render]\nformat = \"json\"\n").unwrap();
    xul(dir.path())
        .current_dir(dir.path())
        .args(["--config", config.to_str().unwrap(), "render", "page.xul"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn explicit_missing_config_exits_4() {
    let dir = workspace();
    xul(dir.path())
        .current_dir(dir.path())
        .args(["--config", "nope.toml", "render", "page.xul"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();
    xul(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("xul"));
}
