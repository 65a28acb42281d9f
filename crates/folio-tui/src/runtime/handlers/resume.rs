use folio_core::config::ResumeConfig;
use folio_core::resume;

use crate::events::UiEvent;

/// Downloads the résumé into the configured directory.
pub async fn download_resume(config: ResumeConfig) -> UiEvent {
    match resume::download_configured(&config, None).await {
        Ok(path) => UiEvent::ResumeDownloaded { path },
        Err(e) => UiEvent::ResumeFailed {
            error: format!("{e:#}"),
        },
    }
}
