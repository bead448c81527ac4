use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use tempfile::tempdir;

fn book_input() -> String {
    let ctx = json!({
        "root": "/book",
        "config": {"book": {"title": "ContainerSSH"}, "preprocessor": {"docmacro": {}}},
        "renderer": "html",
        "mdbook_version": "0.4.40"
    });
    let book = json!({
        "sections": [{"Chapter": {
            "name": "Audit log",
            "content": "# Audit log {{ since(\"0.3.0\") }}\n",
            "number": [1],
            "sub_items": [],
            "path": "audit.md",
            "source_path": "audit.md",
            "parent_names": []
        }}],
        "__non_exhaustive": null
    });
    json!([ctx, book]).to_string()
}

#[test]
fn supports_html_but_not_epub() {
    let tmp = tempdir().unwrap();

    let mut html = Command::new(assert_cmd::cargo::cargo_bin!("docmacro"));
    html.env("XDG_CONFIG_HOME", tmp.path());
    html.args(["supports", "html"]).assert().success();

    let mut epub = Command::new(assert_cmd::cargo::cargo_bin!("docmacro"));
    epub.env("XDG_CONFIG_HOME", tmp.path());
    epub.args(["supports", "epub"]).assert().failure();
}

#[test]
fn bare_invocation_preprocesses_book() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmacro"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.write_stdin(book_input());

    let assert = cmd.assert().success();
    let out: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let content = out["sections"][0]["Chapter"]["content"].as_str().unwrap();
    assert!(content.starts_with(
        "# Audit log <a href=\"https://github.com/janoszen/containerssh/releases\""
    ));
    assert!(content.contains(r#"<span class="since__value">0.3.0</span>"#));
}

#[test]
fn preprocess_rejects_garbage() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmacro"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("preprocess").write_stdin("not json");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("FAIL docmacro preprocess"));
}

#[test]
fn preprocess_ignores_broken_default_config() {
    let tmp = tempdir().unwrap();
    let cfg_dir = tmp.path().join("docmacro");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.toml"), "version = 2\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmacro"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("preprocess").write_stdin(book_input());

    let assert = cmd.assert().success();
    let out: Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    let content = out["sections"][0]["Chapter"]["content"].as_str().unwrap();
    assert!(content.contains(r#"<span class="since__value">0.3.0</span>"#));
}

#[test]
fn supports_ignores_broken_default_config() {
    let tmp = tempdir().unwrap();
    let cfg_dir = tmp.path().join("docmacro");
    std::fs::create_dir_all(&cfg_dir).unwrap();
    std::fs::write(cfg_dir.join("config.toml"), "not = [toml\n").unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmacro"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["supports", "html"]).assert().success();
}
