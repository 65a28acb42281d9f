use folio_core::config::MailConfig;
use folio_core::contact::OutgoingMail;
use folio_core::contact::mail::{MailClient, MailSettings};

use crate::events::UiEvent;

/// Delivers a validated contact message.
pub async fn send_mail(config: MailConfig, mail: OutgoingMail) -> UiEvent {
    let result = async {
        let client = MailClient::new(MailSettings::from_config(&config)?);
        client.send(&mail).await
    }
    .await;

    match result {
        Ok(()) => UiEvent::EmailSent,
        Err(e) => UiEvent::EmailFailed {
            error: format!("{e:#}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_base_url_reports_failure() {
        let config = MailConfig {
            base_url: Some("not a url".to_string()),
            ..MailConfig::default()
        };
        let mail = OutgoingMail {
            from_email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        assert!(matches!(
            send_mail(config, mail).await,
            UiEvent::EmailFailed { .. }
        ));
    }
}
