//! Chat transcript shown in the assistant panel.

use chrono::{DateTime, Local};

/// Greeting the log is seeded with.
pub const GREETING: &str = "Hey there! I'm Reum, Rham's AI Assistant. Welcome to the studio. \
                            Ask me anything about his projects, skills, or background!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Local::now(),
        }
    }
}

/// Append-only, insertion-ordered message log.
///
/// There is no way to remove or reorder entries.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Creates a log holding only the greeting.
    pub fn seeded() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_model_greeting() {
        let log = ChatLog::seeded();
        assert_eq!(log.len(), 1);
        assert_eq!(log.messages()[0].role, ChatRole::Model);
        assert!(log.messages()[0].text.starts_with("Hey there! I'm Reum"));
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut log = ChatLog::seeded();
        log.push(ChatMessage::user("first"));
        log.push(ChatMessage::model("reply"));
        log.push(ChatMessage::user("second"));

        let texts: Vec<_> = log.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[1..], ["first", "reply", "second"]);
        assert_eq!(log.last().map(|m| m.role), Some(ChatRole::User));
    }
}
