//! One-shot assistant question.

use anyhow::Result;
use folio_core::assistant::AssistantGateway;
use folio_core::config::Config;

/// Prints the assistant's reply. Remote failures print the fallback text and
/// still succeed.
pub async fn run(config: &Config, prompt: &str) -> Result<()> {
    let gateway = AssistantGateway::from_config(config)?;
    let reply = gateway.ask(prompt).await;
    println!("{reply}");
    Ok(())
}
