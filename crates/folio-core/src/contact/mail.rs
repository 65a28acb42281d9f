//! EmailJS REST client.

use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;

use super::OutgoingMail;
use crate::assistant::shared::{
    ProviderError, USER_AGENT, classify_reqwest_error, resolve_base_url,
};
use crate::config::MailConfig;

const DEFAULT_BASE_URL: &str = "https://api.emailjs.com";

/// Resolved EmailJS settings.
#[derive(Debug, Clone)]
pub struct MailSettings {
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl MailSettings {
    /// Base URL: `EMAILJS_BASE_URL`, then `[mail] base_url`, then the public API.
    ///
    /// # Errors
    /// Returns an error if the chosen base URL does not parse.
    pub fn from_config(config: &MailConfig) -> Result<Self> {
        let base_url = resolve_base_url(
            config.effective_base_url(),
            "EMAILJS_BASE_URL",
            DEFAULT_BASE_URL,
            "EmailJS",
        )?;
        Ok(Self {
            base_url,
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        })
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    from_email: &'a str,
    subject: &'a str,
    message: &'a str,
}

pub struct MailClient {
    settings: MailSettings,
    http: reqwest::Client,
}

impl MailClient {
    pub fn new(settings: MailSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
        }
    }

    /// Delivers one message. Any non-2xx status is a failure.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] on transport or HTTP failure.
    pub async fn send(&self, mail: &OutgoingMail) -> Result<()> {
        let request = SendRequest {
            service_id: &self.settings.service_id,
            template_id: &self.settings.template_id,
            user_id: &self.settings.public_key,
            template_params: TemplateParams {
                from_email: &mail.from_email,
                subject: &mail.subject,
                message: &mail.message,
            },
        };
        let url = format!("{}/api/v1.0/email/send", self.settings.base_url);

        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers.insert("user-agent", HeaderValue::from_static(USER_AGENT));

        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "email send rejected");
            return Err(ProviderError::http_status(status.as_u16(), &body).into());
        }

        tracing::info!(from = %mail.from_email, "email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::contact::ContactForm;

    fn settings(base_url: String) -> MailSettings {
        MailSettings {
            base_url,
            service_id: "service_u8xe0qr".to_string(),
            template_id: "template_vvmcuct".to_string(),
            public_key: "DYbwVBHhZt2Xyx85S".to_string(),
        }
    }

    #[test]
    fn settings_default_to_public_api() {
        let settings = MailSettings::from_config(&MailConfig::default()).unwrap();
        if std::env::var_os("EMAILJS_BASE_URL").is_none() {
            assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        }
        assert_eq!(settings.service_id, "service_u8xe0qr");
    }

    #[tokio::test]
    async fn send_posts_emailjs_payload() {
        let server = MockServer::start().await;
        let mail = ContactForm::new("me@example.com", "Hello", "Hi Rham")
            .prepare()
            .unwrap();

        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_json(json!({
                "service_id": "service_u8xe0qr",
                "template_id": "template_vvmcuct",
                "user_id": "DYbwVBHhZt2Xyx85S",
                "template_params": {
                    "from_email": "me@example.com",
                    "subject": "Hello",
                    "message": mail.message,
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        MailClient::new(settings(server.uri()))
            .send(&mail)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn send_fails_on_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The user ID is invalid"))
            .mount(&server)
            .await;

        let mail = ContactForm::new("me@example.com", "", "").prepare().unwrap();
        let err = MailClient::new(settings(server.uri()))
            .send(&mail)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP 400");
    }
}
