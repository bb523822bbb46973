//! Integration tests for the stowage binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn demo_site() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("site")
}

fn stowage() -> Command {
    let mut cmd = Command::new(cargo_bin("stowage"));
    cmd.env_remove("STOWAGE_ORDER").env("NO_COLOR", "1");
    cmd
}

fn in_demo() -> Command {
    let mut cmd = stowage();
    cmd.arg("--project").arg(demo_site());
    cmd
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".stowage");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.yml"), config).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    stowage()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"))
        .stdout(predicate::str::contains("providers"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    stowage()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    stowage().assert().failure();
    Ok(())
}

#[test]
fn resolve_prefers_client_override() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["resolve", "nav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("client_custom"))
        .stdout(predicate::str::contains("nav.html"));
    Ok(())
}

#[test]
fn resolve_falls_back_to_base() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["resolve", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_app"));
    Ok(())
}

#[test]
fn resolve_subpackage_template() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["resolve", "admin.index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("admin"));
    Ok(())
}

#[test]
fn resolve_missing_template_fails() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["resolve", "admin.missing"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("admin.missing"))
        .stderr(predicate::str::contains("client_custom, shared, base"));
    Ok(())
}

#[test]
fn order_flag_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["--order", "base", "resolve", "nav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_app"));
    Ok(())
}

#[test]
fn order_env_var_overrides_config() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .env("STOWAGE_ORDER", "base,client_custom")
        .args(["resolve", "nav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_app"));
    Ok(())
}

#[test]
fn unknown_provider_in_order_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["--order", "nonexistent,base", "resolve", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_app"));
    Ok(())
}

#[test]
fn explain_lists_every_probe() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["resolve", "index", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ client_custom (client_custom.templates)"))
        .stdout(predicate::str::contains("○ shared (shared_lib.templates)"))
        .stdout(predicate::str::contains("● base (base_app.templates)"));
    Ok(())
}

#[test]
fn resolve_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let output = in_demo().args(["resolve", "nav", "--json"]).output()?;
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc["provider"], "client_custom");
    assert_eq!(doc["name"], "nav");
    Ok(())
}

#[test]
fn show_prints_template_source() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["show", "nav"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Client Portal"));
    Ok(())
}

#[test]
fn show_missing_template_fails() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["show", "nonexistent"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nonexistent"));
    Ok(())
}

#[test]
fn providers_lists_namespace() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Providers in namespace \"templates\":"))
        .stdout(predicate::str::contains("base (package base_app.templates)"))
        .stdout(predicate::str::contains("[not installed]"));
    Ok(())
}

#[test]
fn quiet_suppresses_hints() -> Result<(), Box<dyn std::error::Error>> {
    in_demo()
        .args(["--quiet", "providers"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Lookup order").not());
    Ok(())
}

#[test]
fn missing_config_exits_with_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    stowage()
        .arg("--project")
        .arg(temp.path())
        .args(["resolve", "index"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No configuration found"));
    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("namespace: \"\"\n");
    stowage()
        .arg("--project")
        .arg(temp.path())
        .args(["resolve", "index"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
    Ok(())
}

#[test]
fn malformed_provider_declaration_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
providers:
  templates:
    base: base_app.templates
    broken: base_app..templates
  other:
    broken: a..b
"#,
    );
    let templates = temp.path().join("base_app").join("templates");
    fs::create_dir_all(&templates)?;
    fs::write(templates.join("index.html"), "<h1>index</h1>")?;

    stowage()
        .arg("--project")
        .arg(temp.path())
        .args(["resolve", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("base_app"))
        .stdout(predicate::str::contains("index.html"))
        .stderr(predicate::str::contains("will be skipped"));
    Ok(())
}

#[test]
fn project_root_discovered_from_subdirectory() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("providers:\n  templates:\n    base: base_app.templates\n");
    let templates = temp.path().join("base_app").join("templates");
    fs::create_dir_all(&templates)?;
    fs::write(templates.join("index.html"), "<h1>index</h1>")?;

    stowage()
        .current_dir(&templates)
        .args(["resolve", "index"])
        .assert()
        .success()
        .stdout(predicate::str::contains("index.html"));
    Ok(())
}

#[test]
fn completions_for_bash() -> Result<(), Box<dyn std::error::Error>> {
    stowage()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stowage"));
    Ok(())
}
