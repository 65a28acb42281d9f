//! Contact form from the command line.

use anyhow::{Context, Result, bail};
use folio_core::config::Config;
use folio_core::contact::{ContactForm, INVALID_EMAIL, MailClient, MailSettings};

/// Validates the sender, then delivers the message.
///
/// An invalid address fails before any request is made.
pub async fn run(config: &Config, email: String, subject: String, body: String) -> Result<()> {
    let mut form = ContactForm::new(email, subject, body);
    let Some(mail) = form.prepare() else {
        bail!("{INVALID_EMAIL}");
    };

    let client = MailClient::new(MailSettings::from_config(&config.mail)?);
    client.send(&mail).await.context("send message")?;
    println!("Message sent! Rham will get back to you soon.");
    Ok(())
}
