//! Full-screen portfolio.

use anyhow::Result;
use folio_core::config::Config;
use folio_core::router::ViewState;

pub async fn run(config: Config, view: Option<&str>) -> Result<()> {
    let view = view.map(str::parse::<ViewState>).transpose()?.unwrap_or_default();
    tracing::debug!(%view, "launching interactive portfolio");
    launch(config, view).await
}

#[cfg(feature = "tui")]
async fn launch(config: Config, view: ViewState) -> Result<()> {
    folio_tui::run_interactive(config, view).await
}

#[cfg(not(feature = "tui"))]
async fn launch(_config: Config, _view: ViewState) -> Result<()> {
    anyhow::bail!("This build has no interactive mode. Rebuild with the `tui` feature.")
}
