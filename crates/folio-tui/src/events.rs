//! UI event types.
//!
//! All inputs (terminal, timers, async results) are converted to `UiEvent`
//! before reaching the reducer.
//!
//! ## Task Lifecycle Events
//!
//! Async work uses a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`

use std::path::PathBuf;

use crossterm::event::Event as CrosstermEvent;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

#[derive(Debug)]
pub enum UiEvent {
    /// Animation/render cadence.
    Tick,
    /// Current terminal size, sent before other events each loop.
    Frame { width: u16, height: u16 },
    Terminal(CrosstermEvent),

    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Assistant reply (or fallback) for the chat panel.
    ChatReply { text: String },
    /// Assistant insight for a search query.
    Insight { query: String, text: String },

    EmailSent,
    EmailFailed { error: String },

    ResumeDownloaded { path: PathBuf },
    ResumeFailed { error: String },

    /// Informational message shown in an alert overlay.
    Notice { message: String },
}
