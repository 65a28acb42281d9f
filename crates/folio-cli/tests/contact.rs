//! Integration tests for the contact command.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_folio_home() -> TempDir {
    TempDir::new().expect("create temp folio home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[test]
fn test_invalid_email_fails_before_sending() {
    let home = temp_folio_home();
    // Unroutable base URL: any request would fail with a different message.
    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .env("EMAILJS_BASE_URL", "http://127.0.0.1:9")
        .args(["contact", "--email", "not-an-email", "--body", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid email address."));
}

#[tokio::test]
async fn test_valid_message_is_delivered() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_folio_home();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1.0/email/send"))
        .and(body_partial_json(json!({
            "template_params": { "from_email": "fan@example.com", "subject": "Hello" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .env("EMAILJS_BASE_URL", mock_server.uri())
        .args([
            "contact",
            "--email",
            "fan@example.com",
            "--subject",
            "Hello",
            "--body",
            "Loved the discography.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message sent!"));
}

#[tokio::test]
async fn test_rejected_message_fails() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_folio_home();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("The public key is invalid"))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("folio")
        .env("FOLIO_HOME", home.path())
        .env("EMAILJS_BASE_URL", mock_server.uri())
        .args(["contact", "--email", "fan@example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("send message"));
}
