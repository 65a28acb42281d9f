//! Effect handlers for the TUI runtime.
//!
//! Handlers are async functions that perform I/O and return the `UiEvent`
//! carrying the outcome. They never touch state; the runtime spawns them and
//! forwards their result to the inbox.
//!
//! ```ignore
//! // Handler: pure async, returns UiEvent
//! pub async fn send_mail(settings: MailSettings, mail: OutgoingMail) -> UiEvent { ... }
//!
//! // Runtime: spawns with a task lifecycle and sends to inbox
//! self.spawn_task(TaskKind::Email, task, move || handlers::send_mail(settings, mail));
//! ```

pub mod assistant;
pub mod mail;
pub mod resume;

pub use assistant::*;
pub use mail::*;
pub use resume::*;
