use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_config_path_uses_folio_home() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("config.toml");

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn test_config_init_creates_file_once() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("[resume]"));

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_path_works_with_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "theme = [").unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", dir.path())
        .arg("print")
        .assert()
        .failure()
        .stderr(predicate::str::contains("load config"));
}
