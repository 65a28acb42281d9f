//! View routing.
//!
//! The router is the single source of truth for which screen is showing.
//! Every navigation request replaces the current view; there is no history
//! and no transition is ever rejected.

use std::fmt;
use std::str::FromStr;

/// Top-level screens. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Home,
    Search,
    About,
    Stack,
    Projects,
    Certificates,
    Cv,
    Contact,
}

impl ViewState {
    /// Returns all views in sidebar order.
    pub fn all() -> &'static [ViewState] {
        &[
            ViewState::Home,
            ViewState::Search,
            ViewState::About,
            ViewState::Stack,
            ViewState::Projects,
            ViewState::Certificates,
            ViewState::Cv,
            ViewState::Contact,
        ]
    }

    /// Returns the short identifier accepted by `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Search => "search",
            ViewState::About => "about",
            ViewState::Stack => "stack",
            ViewState::Projects => "projects",
            ViewState::Certificates => "certificates",
            ViewState::Cv => "cv",
            ViewState::Contact => "contact",
        }
    }

    /// Returns the sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            ViewState::Home => "Home",
            ViewState::Search => "Search",
            ViewState::About => "About",
            ViewState::Stack => "Tech Stack",
            ViewState::Projects => "Discography",
            ViewState::Certificates => "Awards",
            ViewState::Cv => "Curriculum Vitae",
            ViewState::Contact => "Contact Me",
        }
    }

    /// Returns the header title shown at the top of the view.
    pub fn title(self) -> &'static str {
        match self {
            ViewState::Home | ViewState::About => crate::content::PROFILE.name,
            ViewState::Search => "Browse All",
            ViewState::Stack => "Your Library",
            ViewState::Projects => "Discography",
            ViewState::Certificates => "Awards Hall",
            ViewState::Cv => "Rham's CV",
            ViewState::Contact => "Contact Rham",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ViewState {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ViewState::all()
            .iter()
            .copied()
            .find(|view| view.id() == normalized)
            .ok_or_else(|| {
                let names: Vec<_> = ViewState::all().iter().map(|v| v.id()).collect();
                anyhow::anyhow!(
                    "Unknown view '{}'. Expected one of: {}",
                    s.trim(),
                    names.join(", ")
                )
            })
    }
}

/// Navigation state: the active view plus the fullscreen-player flag that
/// every navigation collapses.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: ViewState,
    player_fullscreen: bool,
}

impl Router {
    /// Creates a router showing `initial`.
    pub fn new(initial: ViewState) -> Self {
        Self {
            current: initial,
            player_fullscreen: false,
        }
    }

    /// Replaces the active view and collapses the fullscreen player.
    ///
    /// The collapse happens even when `view` is already active.
    pub fn set_view(&mut self, view: ViewState) {
        tracing::debug!(from = %self.current, to = %view, "navigate");
        self.current = view;
        self.player_fullscreen = false;
    }

    pub fn current_view(&self) -> ViewState {
        self.current
    }

    pub fn player_fullscreen(&self) -> bool {
        self.player_fullscreen
    }

    pub fn set_player_fullscreen(&mut self, fullscreen: bool) {
        self.player_fullscreen = fullscreen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_is_home() {
        let router = Router::default();
        assert_eq!(router.current_view(), ViewState::Home);
        assert!(!router.player_fullscreen());
    }

    #[test]
    fn test_set_view_targets_exact_value_and_collapses_fullscreen() {
        for &target in ViewState::all() {
            let mut router = Router::default();
            router.set_player_fullscreen(true);
            router.set_view(target);
            assert_eq!(router.current_view(), target);
            assert!(!router.player_fullscreen());
        }
    }

    #[test]
    fn test_set_view_to_same_view_still_collapses_fullscreen() {
        let mut router = Router::new(ViewState::Stack);
        router.set_player_fullscreen(true);
        router.set_view(ViewState::Stack);
        assert_eq!(router.current_view(), ViewState::Stack);
        assert!(!router.player_fullscreen());
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("CV".parse::<ViewState>().unwrap(), ViewState::Cv);
        assert_eq!(" Contact ".parse::<ViewState>().unwrap(), ViewState::Contact);
        let err = "playlist".parse::<ViewState>().unwrap_err();
        assert!(err.to_string().contains("Unknown view 'playlist'"));
    }
}
