//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_core::router::ViewState;

use crate::common::text::single_line;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{
    FeatureUpdate, about, chat, contact, cv, discography, home, search, sidebar,
};
use crate::mutations::StateMutation;
use crate::overlays::{Overlay, OverlayRequest, OverlayTransition, OverlayUpdate};
use crate::state::{AppState, Focus, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.tui.viewport = (width, height);
            app.tui.settle_focus();
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            // Results for a task that is no longer active are dropped.
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
        UiEvent::ChatReply { text } => {
            chat::handle_reply(&mut app.tui.chat, text);
            vec![]
        }
        UiEvent::Insight { query, text } => {
            search::handle_insight(&mut app.tui.search, &query, text);
            vec![]
        }
        UiEvent::EmailSent => {
            contact::on_sent(&mut app.tui.contact);
            open_overlay(app, OverlayRequest::EmailSent);
            vec![]
        }
        UiEvent::EmailFailed { error } => {
            tracing::warn!(%error, "contact message not delivered");
            open_overlay(
                app,
                OverlayRequest::Alert {
                    message: contact::SEND_FAILED.to_string(),
                },
            );
            vec![]
        }
        UiEvent::ResumeDownloaded { path } => {
            app.tui.cv.saved_to = Some(path);
            vec![]
        }
        UiEvent::ResumeFailed { error } => {
            tracing::warn!(%error, "résumé download failed");
            vec![]
        }
        UiEvent::Notice { message } => {
            open_overlay(app, OverlayRequest::Alert { message });
            vec![]
        }
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Navigate(view) => tui.navigate(view),
            StateMutation::Focus(focus) => {
                if focus == Focus::Chat {
                    tui.chat_open = true;
                }
                tui.focus = focus;
                tui.settle_focus();
            }
            StateMutation::SetTheme(theme) => {
                tui.theme = theme;
                tui.config.theme = theme;
            }
            StateMutation::SetFollowed(followed) => tui.followed = followed,
        }
    }
}

fn open_overlay(app: &mut AppState, request: OverlayRequest) {
    app.overlay = Some(Overlay::open(request));
}

fn apply_overlay_update(app: &mut AppState, update: OverlayUpdate) -> Vec<UiEffect> {
    apply_mutations(&mut app.tui, update.mutations);
    match update.transition {
        OverlayTransition::Stay => {}
        OverlayTransition::Close => app.overlay = None,
        OverlayTransition::Open(request) => open_overlay(app, request),
    }
    update.effects
}

fn apply_feature_update(app: &mut AppState, update: FeatureUpdate) -> Vec<UiEffect> {
    apply_mutations(&mut app.tui, update.mutations);
    if let Some(request) = update.overlay
        && app.overlay.is_none()
    {
        open_overlay(app, request);
    }
    update.effects
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(&app.tui, key);
        return apply_overlay_update(app, update);
    }

    let tui = &mut app.tui;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        let request = match key.code {
            KeyCode::Char('c') => {
                tui.should_quit = true;
                return vec![UiEffect::Quit];
            }
            KeyCode::Char('t') => {
                tui.chat_open = !tui.chat_open;
                tui.settle_focus();
                return vec![];
            }
            KeyCode::Char('f') => {
                let fullscreen = tui.router.player_fullscreen();
                tui.router.set_player_fullscreen(!fullscreen);
                return vec![];
            }
            KeyCode::Char('p') => Some(OverlayRequest::Premium),
            KeyCode::Char('u') => Some(OverlayRequest::ProfileMenu),
            KeyCode::Char('o') => Some(OverlayRequest::ActionMenu),
            _ => None,
        };
        if let Some(request) = request {
            open_overlay(app, request);
            return vec![];
        }
    }

    match key.code {
        KeyCode::Esc if tui.router.player_fullscreen() => {
            tui.router.set_player_fullscreen(false);
            return vec![];
        }
        KeyCode::Tab => {
            tui.focus = tui.focus.next(tui.chat_visible());
            return vec![];
        }
        KeyCode::BackTab => {
            tui.focus = tui.focus.prev(tui.chat_visible());
            return vec![];
        }
        _ => {}
    }

    let update = match tui.focus {
        Focus::Sidebar => sidebar::handle_key(&mut tui.sidebar, key),
        Focus::Chat => chat::handle_key(tui, key),
        // The now-playing screen replaces the main view while fullscreen.
        Focus::Main if tui.router.player_fullscreen() => FeatureUpdate::none(),
        Focus::Main => handle_main_key(tui, key),
    };
    apply_feature_update(app, update)
}

fn handle_main_key(tui: &mut TuiState, key: KeyEvent) -> FeatureUpdate {
    match tui.current_view() {
        ViewState::Home => home::handle_key(&mut tui.home, key),
        ViewState::Search => search::handle_key(tui, key),
        ViewState::About => about::handle_key(&mut tui.about, key),
        ViewState::Projects => discography::handle_key(&mut tui.discography, key),
        ViewState::Cv => cv::handle_key(tui, key),
        ViewState::Contact => contact::handle_key(tui, key),
        ViewState::Stack | ViewState::Certificates => FeatureUpdate::none(),
    }
}

/// Pastes into whichever text input has focus.
fn handle_paste(app: &mut AppState, text: &str) {
    if app.overlay.is_some() {
        return;
    }
    let tui = &mut app.tui;
    let text = single_line(text);
    match (tui.focus, tui.current_view()) {
        (Focus::Chat, _) => tui.chat.input.push_str(&text),
        (Focus::Main, ViewState::Search) => {
            let query = format!("{}{text}", tui.search.query);
            search::set_query(&mut tui.search, query);
        }
        (Focus::Main, ViewState::Contact) => {
            let field = tui.contact.field;
            tui.contact.form.edit(field, |buffer| {
                buffer.push_str(&text);
                !text.is_empty()
            });
        }
        _ => {}
    }
}
