//! Résumé command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use folio_core::config::Config;
use folio_core::resume;

pub async fn download(config: &Config, dir: Option<&Path>) -> Result<()> {
    let path = resume::download_configured(&config.resume, dir)
        .await
        .context("download résumé")?;
    println!("Saved to {}", path.display());
    Ok(())
}

pub fn open(config: &Config) -> Result<()> {
    resume::preview(&config.resume)?;
    println!("Opened {}", resume::document_url(&config.resume)?);
    Ok(())
}
