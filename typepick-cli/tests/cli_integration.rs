//! End-to-end tests for the typepick binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn typepick(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("typepick").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TYPEPICK_VARIANT")
        .env_remove("TYPEPICK_ALLOW_LIST")
        .env_remove("TYPEPICK_CLASS");
    cmd
}

fn write_registry(dir: &TempDir) {
    fs::write(
        dir.path().join("registry.yaml"),
        "items:\n  - id: post\n    display_name: Posts\n  - id: page\n    display_name: Pages\n",
    )
    .unwrap();
}

#[test]
fn render_select_from_project_settings() {
    let dir = TempDir::new().unwrap();
    write_registry(&dir);
    fs::create_dir_all(dir.path().join(".typepick")).unwrap();
    fs::write(
        dir.path().join(".typepick/field.toml"),
        "variant = \"select\"\nallow_list = \"post,custom_xyz\"\n",
    )
    .unwrap();

    typepick(&dir)
        .args(["render", "--registry", "registry.yaml", "--value", "post"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<option selected="selected" value="post">Posts</option>"#,
        ))
        .stdout(predicate::str::contains("page").not());
}

#[test]
fn render_checkboxes_by_default() {
    let dir = TempDir::new().unwrap();
    write_registry(&dir);

    typepick(&dir)
        .args([
            "render",
            "--registry",
            "registry.yaml",
            "--value",
            r#"["page"]"#,
            "--field-name",
            "types",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<ul class="checkbox_list checkbox">"#))
        .stdout(predicate::str::contains(
            r#"checked="checked" class="" name="types[]" value="page""#,
        ));
}

#[test]
fn env_variant_applies() {
    let dir = TempDir::new().unwrap();
    write_registry(&dir);

    typepick(&dir)
        .env("TYPEPICK_VARIANT", "radio")
        .args(["render", "--registry", "registry.yaml", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""variant": "radio""#));
}

#[test]
fn parse_form_round_trip() {
    let dir = TempDir::new().unwrap();

    typepick(&dir)
        .args([
            "parse",
            "--variant",
            "checkboxes",
            "--field-name",
            "types",
            "--form",
            "types[]=post&types[]=page",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("[\"post\",\"page\"]\n"));
}

#[test]
fn normalize_keeps_empty_segments() {
    let dir = TempDir::new().unwrap();

    typepick(&dir)
        .args(["normalize", "a,,b"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[\"a\",\"\",\"b\"]\n"));
}

#[test]
fn missing_registry_exits_with_error() {
    let dir = TempDir::new().unwrap();

    typepick(&dir)
        .args(["render", "--registry", "nope.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn bad_settings_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    write_registry(&dir);
    fs::write(dir.path().join("field.toml"), "variant = \"dropdown\"\n").unwrap();

    typepick(&dir)
        .args([
            "render",
            "--registry",
            "registry.yaml",
            "--config",
            "field.toml",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}
