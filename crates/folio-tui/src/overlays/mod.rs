//! Overlay modules for the TUI.
//!
//! Overlays are modal dialogs that temporarily take over keyboard input.
//! Each overlay owns its state, key handler, and render function.
//!
//! ## Module Structure
//!
//! - `follow.rs`: "Connect with Rham" social links dialog
//! - `premium.rs`: "Get Rham Premium" call-to-action dialog
//! - `album.rs`: Journey album story
//! - `email_sent.rs`: Contact form success dialog
//! - `alert.rs`: Blocking one-line message
//! - `profile_menu.rs`: Quick navigation menu (Ctrl+U)
//! - `action_menu.rs`: Share, theme, export and source code actions (Ctrl+O)
//! - `render_utils.rs`: Shared rendering utilities for overlays

pub mod action_menu;
pub mod album;
pub mod alert;
pub mod email_sent;
pub mod follow;
pub mod premium;
pub mod profile_menu;
pub mod render_utils;

pub use action_menu::ActionMenuState;
pub use album::AlbumState;
pub use alert::AlertState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
pub use follow::FollowState;
pub use premium::PremiumState;
pub use profile_menu::ProfileMenuState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

// ============================================================================
// OverlayRequest / OverlayTransition / OverlayUpdate
// ============================================================================

/// Requests to open a new overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayRequest {
    Follow,
    Premium,
    Album { index: usize },
    EmailSent,
    Alert { message: String },
    ProfileMenu,
    ActionMenu,
}

/// Transition returned by overlay key handlers.
#[derive(Debug, PartialEq)]
pub enum OverlayTransition {
    Stay,
    Close,
    Open(OverlayRequest),
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub mutations: Vec<StateMutation>,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            mutations: Vec::new(),
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self::new(OverlayTransition::Open(request))
    }

    #[must_use]
    pub fn with_mutations(mut self, mutations: Vec<StateMutation>) -> Self {
        self.mutations = mutations;
        self
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

/// True for the keys every overlay treats as "dismiss".
pub(crate) fn is_dismiss(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

// ============================================================================
// Overlay
// ============================================================================

/// Smallest terminal (width, height) dialogs are drawn in.
const MIN_AREA: (u16, u16) = (24, 10);

#[derive(Debug)]
pub enum Overlay {
    Follow(FollowState),
    Premium(PremiumState),
    Album(AlbumState),
    EmailSent,
    Alert(AlertState),
    ProfileMenu(ProfileMenuState),
    ActionMenu(ActionMenuState),
}

impl Overlay {
    pub fn open(request: OverlayRequest) -> Self {
        match request {
            OverlayRequest::Follow => Overlay::Follow(FollowState::default()),
            OverlayRequest::Premium => Overlay::Premium(PremiumState::default()),
            OverlayRequest::Album { index } => Overlay::Album(AlbumState { index }),
            OverlayRequest::EmailSent => Overlay::EmailSent,
            OverlayRequest::Alert { message } => Overlay::Alert(AlertState { message }),
            OverlayRequest::ProfileMenu => Overlay::ProfileMenu(ProfileMenuState::default()),
            OverlayRequest::ActionMenu => Overlay::ActionMenu(ActionMenuState::default()),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        if area.width < MIN_AREA.0 || area.height < MIN_AREA.1 {
            return;
        }
        match self {
            Overlay::Follow(f) => f.render(frame, area, tui),
            Overlay::Premium(p) => p.render(frame, area, tui),
            Overlay::Album(a) => a.render(frame, area, tui),
            Overlay::EmailSent => email_sent::render(frame, area, tui),
            Overlay::Alert(a) => a.render(frame, area, tui),
            Overlay::ProfileMenu(m) => m.render(frame, area, tui),
            Overlay::ActionMenu(m) => m.render(frame, area, tui),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Follow(f) => f.handle_key(key),
            Overlay::Premium(p) => p.handle_key(key),
            Overlay::Album(_) | Overlay::Alert(_) => dismissable_key(key),
            Overlay::EmailSent => dismissable_key(key),
            Overlay::ProfileMenu(m) => m.handle_key(key),
            Overlay::ActionMenu(m) => m.handle_key(tui, key),
        }
    }
}

/// Key handling for read-only dialogs: any confirm or dismiss key closes.
fn dismissable_key(key: KeyEvent) -> OverlayUpdate {
    if is_dismiss(&key) || matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
        OverlayUpdate::close()
    } else {
        OverlayUpdate::stay()
    }
}

// ============================================================================
// OverlayExt - Extension trait for Option<Overlay>
// ============================================================================

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        if let Some(overlay) = self {
            overlay.render(frame, area, tui);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_open_builds_matching_overlay() {
        assert!(matches!(
            Overlay::open(OverlayRequest::Album { index: 2 }),
            Overlay::Album(AlbumState { index: 2 })
        ));
        assert!(matches!(
            Overlay::open(OverlayRequest::EmailSent),
            Overlay::EmailSent
        ));
    }

    #[test]
    fn test_read_only_dialogs_close_on_enter_or_esc() {
        let tui = TuiState::new(
            folio_core::config::Config::default(),
            folio_core::router::ViewState::Home,
        );
        let mut alert = Overlay::open(OverlayRequest::Alert {
            message: "hi".to_string(),
        });
        assert_eq!(
            alert.handle_key(&tui, key(KeyCode::Char('x'))).transition,
            OverlayTransition::Stay
        );
        assert_eq!(
            alert.handle_key(&tui, key(KeyCode::Enter)).transition,
            OverlayTransition::Close
        );
        let mut sent = Overlay::open(OverlayRequest::EmailSent);
        assert_eq!(
            sent.handle_key(&tui, key(KeyCode::Esc)).transition,
            OverlayTransition::Close
        );
    }
}
