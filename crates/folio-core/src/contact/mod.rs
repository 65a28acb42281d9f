//! Contact form: field state, sender validation and message composition.

pub mod mail;

use std::sync::LazyLock;

use regex::Regex;

pub use mail::{MailClient, MailSettings};

/// Inline error shown under the e-mail field.
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Literal pattern; `test_email_pattern_compiles` keeps it valid.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("email pattern is a valid literal"));

/// Returns true when `email` looks like `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Field being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Email,
    Subject,
    Body,
    Send,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Body,
            ContactField::Body | ContactField::Send => ContactField::Send,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ContactField::Email | ContactField::Subject => ContactField::Email,
            ContactField::Body => ContactField::Subject,
            ContactField::Send => ContactField::Body,
        }
    }
}

/// The three user-editable fields plus the inline validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub subject: String,
    pub body: String,
    pub error: Option<String>,
}

/// A validated message ready to hand to [`MailClient::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        email: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            subject: subject.into(),
            body: body.into(),
            error: None,
        }
    }

    /// Runs `edit` on a text field; `edit` returns whether it changed the text.
    ///
    /// A change to the e-mail clears a shown validation error. Keys that edit
    /// nothing leave the error in place. Returns false for the Send button.
    pub fn edit(&mut self, field: ContactField, edit: impl FnOnce(&mut String) -> bool) -> bool {
        let buffer = match field {
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Body => &mut self.body,
            ContactField::Send => return false,
        };
        let changed = edit(buffer);
        if changed && field == ContactField::Email {
            self.error = None;
        }
        changed
    }

    pub fn field(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Email => Some(&self.email),
            ContactField::Subject => Some(&self.subject),
            ContactField::Body => Some(&self.body),
            ContactField::Send => None,
        }
    }

    /// Validates the sender and composes the outgoing message.
    ///
    /// On failure the inline error is set and `None` is returned. Subject and
    /// body are sent as typed.
    pub fn prepare(&mut self) -> Option<OutgoingMail> {
        if !is_valid_email(&self.email) {
            self.error = Some(INVALID_EMAIL.to_string());
            return None;
        }
        self.error = None;

        Some(OutgoingMail {
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: compose_message(&self.email, &self.subject, &self.body),
        })
    }

    /// Empties all three fields after a successful send.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Builds the body delivered to the portfolio owner.
pub fn compose_message(email: &str, subject: &str, body: &str) -> String {
    format!(
        "New Contact Inquiry from Portfolio\n\
         \n\
         Sender: {email}\n\
         Subject: {subject}\n\
         \n\
         Message:\n\
         {body}\n\
         \n\
         -----------------------------------\n\
         Sent via Rham's Portfolio"
    )
    .trim()
    .to_string()
}
