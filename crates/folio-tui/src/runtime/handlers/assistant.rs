use std::sync::Arc;

use folio_core::assistant::{AssistantGateway, ERROR_FALLBACK, INSIGHT_FALLBACK};

use crate::events::UiEvent;

/// Asks the assistant for a chat reply.
///
/// The gateway already maps remote failures to fallback text; a panicking
/// request is mapped here so the chat indicator always clears.
pub async fn chat_reply(gateway: Arc<AssistantGateway>, text: String) -> UiEvent {
    let reply = tokio::spawn(async move { gateway.ask(&text).await }).await;
    let text = reply.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "chat task aborted");
        ERROR_FALLBACK.to_string()
    });
    UiEvent::ChatReply { text }
}

/// Fetches the search insight for `query`.
pub async fn search_insight(gateway: Arc<AssistantGateway>, query: String) -> UiEvent {
    let task_query = query.clone();
    let reply = tokio::spawn(async move { gateway.search_insight(&task_query).await }).await;
    let text = reply.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "insight task aborted");
        INSIGHT_FALLBACK.to_string()
    });
    UiEvent::Insight { query, text }
}
