//! Full-screen TUI for the folio portfolio.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use folio_core::config::Config;
use folio_core::router::ViewState;
pub use runtime::TuiRuntime;

/// Runs the interactive portfolio until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal fails.
pub async fn run_interactive(config: Config, initial_view: ViewState) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive portfolio requires a terminal.\n\
             Use `folio print` or `folio search <query>` for plain output."
        );
    }

    tracing::info!(view = %initial_view, "starting interactive session");
    let mut runtime = TuiRuntime::new(config, initial_view)?;
    runtime.run()
}
