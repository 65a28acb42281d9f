//! Integration tests for the one-shot assistant command.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_folio_home() -> TempDir {
    TempDir::new().expect("create temp folio home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn test_ask_prints_model_reply() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_folio_home();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"/models/.+:generateContent$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Rham loves Java." }] }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", mock_server.uri())
        .args(["ask", "-p", "What does Rham code in?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rham loves Java."));
}

#[tokio::test]
async fn test_ask_remote_failure_prints_fallback() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_folio_home();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .env("GEMINI_API_KEY", "test-api-key")
        .env("GEMINI_BASE_URL", mock_server.uri())
        .args(["ask", "--prompt", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scratch in the record"));
}

#[test]
fn test_ask_without_key_prints_connect_fallback() {
    let home = temp_folio_home();
    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_BASE_URL")
        .args(["ask", "-p", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trouble connecting to my AI brain"));
}
