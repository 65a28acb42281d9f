//! One conversation with the assistant.

use std::sync::Mutex;

use anyhow::Result;

use super::gemini::{GeminiClient, Turn};

/// A conversation context: the persona, the client and the turn history.
///
/// History is sent with every request. Only exchanges that produced text are
/// recorded, so a failed or empty call leaves the history as it was.
pub struct ChatSession {
    client: GeminiClient,
    system: String,
    history: Mutex<Vec<Turn>>,
}

impl ChatSession {
    pub fn new(client: GeminiClient, system: String) -> Self {
        Self {
            client,
            system,
            history: Mutex::new(Vec::new()),
        }
    }

    /// Sends `text` as the next user turn.
    ///
    /// # Errors
    /// Propagates transport, HTTP and parse failures from the client.
    pub async fn send(&self, text: &str) -> Result<Option<String>> {
        let mut contents = self.history_snapshot();
        contents.push(Turn::user(text));

        let reply = self.client.generate(&self.system, &contents).await?;
        if let Some(reply) = &reply {
            let mut history = self.lock_history();
            history.push(Turn::user(text));
            history.push(Turn::model(reply.clone()));
        }
        Ok(reply)
    }

    /// Number of recorded turns.
    pub fn turn_count(&self) -> usize {
        self.lock_history().len()
    }

    pub fn model(&self) -> &str {
        self.client.model()
    }

    fn history_snapshot(&self) -> Vec<Turn> {
        self.lock_history().clone()
    }

    fn lock_history(&self) -> std::sync::MutexGuard<'_, Vec<Turn>> {
        // A poisoned history is still a valid Vec; keep using it.
        self.history
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
