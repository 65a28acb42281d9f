//! Résumé download and preview.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

use crate::assistant::shared::{ProviderError, USER_AGENT, classify_reqwest_error};
use crate::config::ResumeConfig;

/// Returns the configured document URL.
///
/// # Errors
/// Returns an error if `[resume] url` is unset.
pub fn document_url(config: &ResumeConfig) -> Result<&str> {
    match config.effective_url() {
        Some(url) => Ok(url),
        None => bail!("No résumé URL configured. Set url in [resume]."),
    }
}

/// Fetches `url` and writes it to `dir/file_name`, returning the written path.
///
/// The body is streamed into a temp file in `dir` and renamed into place, so
/// a failed download never leaves a partial document behind.
///
/// # Errors
/// Returns an error on HTTP failure or if the file cannot be written.
pub async fn download(url: &str, dir: &Path, file_name: &str) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("create download dir {}", dir.display()))?;

    let response = reqwest::Client::new()
        .get(url)
        .header("user-agent", USER_AGENT)
        .send()
        .await
        .map_err(|e| classify_reqwest_error(&e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::http_status(status.as_u16(), &body).into());
    }

    let target = dir.join(file_name);
    let partial = dir.join(format!(".{file_name}.part"));
    let result = write_stream(response, &partial).await;
    if let Err(e) = result {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e);
    }

    tokio::fs::rename(&partial, &target)
        .await
        .with_context(|| format!("move download into {}", target.display()))?;
    tracing::info!(path = %target.display(), "résumé downloaded");
    Ok(target)
}

async fn write_stream(response: reqwest::Response, path: &Path) -> Result<()> {
    let mut file = tokio::fs::File::create(path)
        .await
        .with_context(|| format!("create {}", path.display()))?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| classify_reqwest_error(&e))?;
        file.write_all(&chunk)
            .await
            .with_context(|| format!("write {}", path.display()))?;
    }
    file.flush().await.context("flush download")?;
    Ok(())
}

/// Downloads the configured document into `dir`, or the configured download
/// directory when `dir` is `None`.
///
/// # Errors
/// See [`document_url`] and [`download`].
pub async fn download_configured(config: &ResumeConfig, dir: Option<&Path>) -> Result<PathBuf> {
    let url = document_url(config)?;
    let dir = dir.map_or_else(|| config.effective_download_dir(), Path::to_path_buf);
    download(url, &dir, &config.file_name).await
}

/// Opens the configured document in the system browser.
///
/// # Errors
/// Returns an error if no URL is configured or no opener is available.
pub fn preview(config: &ResumeConfig) -> Result<()> {
    let url = document_url(config)?;
    open::that(url).with_context(|| format!("open {url}"))?;
    Ok(())
}
