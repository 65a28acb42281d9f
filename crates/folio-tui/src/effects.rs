//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations).

use folio_core::contact::OutgoingMail;
use folio_core::theme::Theme;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Open a URL in the system browser.
    OpenBrowser { url: String },

    /// Forward a chat utterance to the assistant.
    SendChat { task: TaskId, text: String },

    /// Ask the assistant for a search insight.
    FetchInsight { task: TaskId, query: String },

    /// Deliver a validated contact message.
    SendEmail { task: TaskId, mail: OutgoingMail },

    /// Download the résumé to the configured directory.
    DownloadResume { task: TaskId },

    /// Open the résumé in the browser.
    PreviewResume,

    /// Copy text to the clipboard, then show `notice`.
    CopyToClipboard { text: String, notice: String },

    /// Persist the theme preference to config.
    PersistTheme { theme: Theme },

    /// Write the plain-text portfolio export.
    ExportPortfolio,
}
