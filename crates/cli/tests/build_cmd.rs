use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn build_uses_profile_directories() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("project");
    write(&root.join("docs").join("index.md"), "Welcome {{ since(\"0.1.0\") }}\n");
    write(
        &root.join("docs").join("reference").join("raw.md"),
        "---\nrender_macros: false\n---\n{{ since(\"0.1.0\") }}\n",
    );
    write(&root.join("docs").join("style.css"), ".since { color: gray }");

    let cfg = tmp.path().join("config.toml");
    let toml = format!(
        r#"
version = 1
[profiles.default]
project_root = "{root}"
docs_dir = "{{{{project_root}}}}/docs"
output_dir = "{{{{project_root}}}}/site-src"
"#,
        root = root.display(),
    );
    fs::write(&cfg, toml).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmacro"));
    cmd.args(["--config", cfg.to_str().unwrap(), "build"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   docmacro build"))
        .stdout(predicate::str::contains("pages: 2"))
        .stdout(predicate::str::contains("assets: 1"))
        .stdout(predicate::str::contains("macros expanded: 1"));

    let out = root.join("site-src");
    let index = fs::read_to_string(out.join("index.md")).unwrap();
    assert!(index.contains(r#"<span class="since__value">0.1.0</span>"#));
    let raw = fs::read_to_string(out.join("reference").join("raw.md")).unwrap();
    assert!(raw.ends_with("{{ since(\"0.1.0\") }}\n"));
    assert!(out.join("style.css").exists());
}

#[test]
fn build_with_directory_overrides_and_failure() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    write(&docs.join("bad.md"), "{{ since('a', 'b') }}\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docmacro"));
    cmd.env("XDG_CONFIG_HOME", tmp.path().join("xdg"));
    cmd.args(["build", "--docs-dir", docs.to_str().unwrap()]);
    cmd.args(["--output-dir", tmp.path().join("out").to_str().unwrap()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("FAIL docmacro build"))
        .stdout(predicate::str::contains("bad.md"))
        .stdout(predicate::str::contains("expected 1 argument, got 2"));
}
