//! Integration tests for résumé download.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_folio_home() -> TempDir {
    TempDir::new().expect("create temp folio home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn test_download_writes_document() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_folio_home();
    let out = TempDir::new().unwrap();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cv.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4 fake".to_vec()))
        .expect(1)
        .mount(&mock_server)
        .await;

    std::fs::write(
        home.path().join("config.toml"),
        format!("[resume]\nurl = \"{}/cv.pdf\"\n", mock_server.uri()),
    )
    .unwrap();

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .args(["resume", "download", "--dir", out.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"))
        .stdout(predicate::str::contains("Rham_Consigna_CV.pdf"));

    let saved = std::fs::read(out.path().join("Rham_Consigna_CV.pdf")).unwrap();
    assert_eq!(saved, b"%PDF-1.4 fake");
}

#[test]
fn test_download_without_url_fails() {
    let home = temp_folio_home();
    let out = TempDir::new().unwrap();
    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .args(["resume", "download", "--dir", out.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No résumé URL configured"));
}
