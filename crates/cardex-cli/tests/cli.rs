use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cardex(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cardex").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("HOME", home);
    cmd
}

fn database(dir: &TempDir) -> String {
    dir.path().join("cards.db").display().to_string()
}

#[test]
fn list_on_empty_database() {
    let dir = tempfile::tempdir().unwrap();

    cardex(dir.path())
        .args(["--database", &database(&dir), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No cards stored."));

    assert!(dir.path().join("cards.db").exists());
}

#[test]
fn list_json_on_empty_database() {
    let dir = tempfile::tempdir().unwrap();

    cardex(dir.path())
        .args(["--database", &database(&dir), "list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn show_missing_card_fails() {
    let dir = tempfile::tempdir().unwrap();

    cardex(dir.path())
        .args(["--database", &database(&dir), "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No card with ID 1"));
}

#[test]
fn update_and_delete_missing_card_succeed() {
    let dir = tempfile::tempdir().unwrap();

    cardex(dir.path())
        .args(["--database", &database(&dir), "update", "3", "--company-name", "Globex"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card 3 updated"));

    cardex(dir.path())
        .args(["--database", &database(&dir), "delete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Card 5 deleted"));
}

#[test]
fn card_ids_must_be_positive() {
    let dir = tempfile::tempdir().unwrap();

    cardex(dir.path())
        .args(["--database", &database(&dir), "delete", "0"])
        .assert()
        .failure();
}

#[test]
fn extract_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    cardex(dir.path())
        .args(["--database", &database(&dir), "extract", "nowhere/card.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn extract_without_models_fails() {
    let dir = tempfile::tempdir().unwrap();
    let card = dir.path().join("card.png");
    std::fs::write(&card, b"\x89PNG\r\n\x1a\n").unwrap();

    cardex(dir.path())
        .args(["--database", &database(&dir), "extract"])
        .arg(&card)
        .args(["--model-dir"])
        .arg(dir.path().join("models"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("OCR models not found"));
}

#[test]
fn config_init_then_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cardex.json");

    cardex(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not created"));

    cardex(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    cardex(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    cardex(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "set", "store.database_path", "elsewhere.db"])
        .assert()
        .success();

    cardex(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "store.database_path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere.db"));
}

#[test]
fn malformed_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("cardex.json");
    std::fs::write(&config, "{ not json").unwrap();

    cardex(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--database", &database(&dir), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration error"));
}
