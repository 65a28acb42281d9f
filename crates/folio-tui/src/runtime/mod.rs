//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `inbox.rs`: Inbox channel types
//! - `handlers/`: Effect handler implementations (network, files)

mod handlers;
mod inbox;

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use folio_core::assistant::AssistantGateway;
use folio_core::config::{Config, paths};
use folio_core::router::ViewState;
use folio_core::{export, resume};
use inbox::{UiEventReceiver, UiEventSender};
use tokio::sync::mpsc;

use crate::common::{Clipboard, TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::TerminalSession;
use crate::{render, update};

/// Frame cadence while something is animating (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Longer timeout reduces CPU usage.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
pub struct TuiRuntime {
    session: TerminalSession,
    pub state: AppState,
    gateway: Arc<AssistantGateway>,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates the runtime and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the persona prompt cannot be read or the terminal
    /// cannot be set up.
    pub fn new(config: Config, initial_view: ViewState) -> Result<Self> {
        let gateway = Arc::new(AssistantGateway::from_config(&config)?);
        let session = TerminalSession::enter().context("Failed to setup terminal")?;
        let state = AppState::new(config, initial_view);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = Instant::now();
        Ok(Self {
            session,
            state,
            gateway,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if polling or drawing the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            let mut events = self.collect_events()?;

            let size = self.session.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render; input batches to the next tick.
                let marks_dirty = matches!(&event, UiEvent::Tick);

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                let state = &self.state;
                self.session
                    .terminal
                    .draw(|frame| render::render(state, frame))?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if self.state.tui.tasks.is_any_running() || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        self.execute_effects(effects);
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let _ = tx.send(UiEvent::TaskStarted {
            kind,
            started: TaskStarted { id },
        });
        tokio::spawn(async move {
            let completed = TaskCompleted {
                id,
                result: Box::new(f().await),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::OpenBrowser { url } => {
                if let Err(e) = open::that(&url) {
                    tracing::warn!(%url, "Failed to open browser: {e}");
                }
            }

            UiEffect::SendChat { task, text } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_task(TaskKind::Chat, task, move || {
                    handlers::chat_reply(gateway, text)
                });
            }
            UiEffect::FetchInsight { task, query } => {
                let gateway = Arc::clone(&self.gateway);
                self.spawn_task(TaskKind::Insight, task, move || {
                    handlers::search_insight(gateway, query)
                });
            }
            UiEffect::SendEmail { task, mail } => {
                let config = self.state.tui.config.mail.clone();
                self.spawn_task(TaskKind::Email, task, move || {
                    handlers::send_mail(config, mail)
                });
            }
            UiEffect::DownloadResume { task } => {
                let config = self.state.tui.config.resume.clone();
                self.spawn_task(TaskKind::Resume, task, move || {
                    handlers::download_resume(config)
                });
            }

            UiEffect::PreviewResume => {
                if let Err(e) = resume::preview(&self.state.tui.config.resume) {
                    tracing::warn!("Résumé preview failed: {e:#}");
                }
            }
            UiEffect::CopyToClipboard { text, notice } => {
                let message = match Clipboard::copy(&text) {
                    Ok(()) => notice,
                    Err(e) => {
                        tracing::warn!("Clipboard copy failed: {e}");
                        format!("Could not copy to clipboard: {text}")
                    }
                };
                self.dispatch_event(UiEvent::Notice { message });
            }
            UiEffect::PersistTheme { theme } => match Config::save_theme(theme) {
                Ok(()) => tracing::info!(theme = theme.id(), "theme saved"),
                Err(e) => tracing::warn!("Failed to save theme: {e:#}"),
            },
            UiEffect::ExportPortfolio => {
                let path = paths::export_path();
                let message = match export::write_to(&path) {
                    Ok(()) => format!("Portfolio saved to {}", path.display()),
                    Err(e) => {
                        tracing::warn!("Portfolio export failed: {e:#}");
                        format!("Could not save the portfolio: {e}")
                    }
                };
                self.dispatch_event(UiEvent::Notice { message });
            }
        }
    }
}
