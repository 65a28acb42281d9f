//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── router: Router         (active view + fullscreen player flag)
//! │   ├── focus / chat_open      (panel layout)
//! │   ├── task_seq / tasks       (async task lifecycle)
//! │   └── one slice per feature  (sidebar, home, search, about, ...)
//! └── overlay: Option<Overlay>   (modal overlays)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can get `&mut self` and `&TuiState` at the same time.

use folio_core::config::Config;
use folio_core::router::{Router, ViewState};
use folio_core::theme::Theme;
use ratatui::style::Color;

use crate::common::{TaskId, TaskKind, TaskSeq, Tasks};
use crate::features::{
    about::AboutState, chat::ChatState, contact::ContactState, cv::CvState,
    discography::DiscographyState, home::HomeState, search::SearchState, sidebar::SidebarState,
};
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(config: Config, initial_view: ViewState) -> Self {
        Self {
            tui: TuiState::new(config, initial_view),
            overlay: None,
        }
    }
}

/// Panel that receives keys not claimed by a global binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Main,
    Chat,
}

impl Focus {
    /// Next panel in Sidebar → Main → Chat order, skipping a hidden chat.
    pub fn next(self, chat_visible: bool) -> Self {
        match self {
            Focus::Sidebar => Focus::Main,
            Focus::Main if chat_visible => Focus::Chat,
            Focus::Main | Focus::Chat => Focus::Sidebar,
        }
    }

    pub fn prev(self, chat_visible: bool) -> Self {
        match self {
            Focus::Sidebar if chat_visible => Focus::Chat,
            Focus::Sidebar | Focus::Chat => Focus::Main,
            Focus::Main => Focus::Sidebar,
        }
    }
}

/// Below this width the chat panel is hidden even when open.
pub const MIN_WIDTH_FOR_CHAT: u16 = 100;

pub struct TuiState {
    pub config: Config,
    pub router: Router,
    pub theme: Theme,
    pub focus: Focus,
    pub chat_open: bool,
    /// Set on the first Follow press; the header then reads "Connected".
    pub followed: bool,
    pub should_quit: bool,
    pub spinner_frame: usize,
    pub viewport: (u16, u16),

    pub task_seq: TaskSeq,
    pub tasks: Tasks,

    pub sidebar: SidebarState,
    pub home: HomeState,
    pub search: SearchState,
    pub about: AboutState,
    pub discography: DiscographyState,
    pub contact: ContactState,
    pub cv: CvState,
    pub chat: ChatState,
}

impl TuiState {
    pub fn new(config: Config, initial_view: ViewState) -> Self {
        let theme = config.theme;
        Self {
            config,
            router: Router::new(initial_view),
            theme,
            focus: Focus::default(),
            chat_open: true,
            followed: false,
            should_quit: false,
            spinner_frame: 0,
            viewport: (0, 0),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            sidebar: SidebarState::for_view(initial_view),
            home: HomeState::default(),
            search: SearchState::default(),
            about: AboutState::default(),
            discography: DiscographyState::default(),
            contact: ContactState::default(),
            cv: CvState::default(),
            chat: ChatState::default(),
        }
    }

    pub fn accent(&self) -> Color {
        let (r, g, b) = self.theme.accent_rgb();
        Color::Rgb(r, g, b)
    }

    /// Whether the chat panel is drawn at terminal width `width`.
    pub fn chat_visible_at(&self, width: u16) -> bool {
        self.chat_open && width >= MIN_WIDTH_FOR_CHAT
    }

    /// Chat visibility at the last frame size. Before the first frame the
    /// width is unknown and only `chat_open` counts.
    pub fn chat_visible(&self) -> bool {
        match self.viewport.0 {
            0 => self.chat_open,
            width => self.chat_visible_at(width),
        }
    }

    /// Moves focus off the chat once it is no longer drawn.
    pub fn settle_focus(&mut self) {
        if self.focus == Focus::Chat && !self.chat_visible() {
            self.focus = Focus::Main;
        }
    }

    pub fn current_view(&self) -> ViewState {
        self.router.current_view()
    }

    /// Routes to `view` and keeps the sidebar highlight in sync.
    pub fn navigate(&mut self, view: ViewState) {
        self.router.set_view(view);
        self.sidebar = SidebarState::for_view(view);
    }

    pub fn is_running(&self, kind: TaskKind) -> bool {
        self.tasks.state(kind).is_running()
    }

    /// Allocates a task id and marks its slot running.
    pub fn begin_task(&mut self, kind: TaskKind) -> TaskId {
        let id = self.task_seq.next_id();
        self.tasks.state_mut(kind).reserve(id);
        id
    }

    pub fn spinner(&self) -> &'static str {
        const FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];
        FRAMES[(self.spinner_frame / 4) % FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_skips_hidden_chat() {
        assert_eq!(Focus::Sidebar.next(true), Focus::Main);
        assert_eq!(Focus::Main.next(true), Focus::Chat);
        assert_eq!(Focus::Chat.next(true), Focus::Sidebar);
        assert_eq!(Focus::Main.next(false), Focus::Sidebar);
        assert_eq!(Focus::Sidebar.prev(false), Focus::Main);
        assert_eq!(Focus::Sidebar.prev(true), Focus::Chat);
    }

    #[test]
    fn test_chat_visibility_follows_width() {
        let mut tui = TuiState::new(Config::default(), ViewState::Home);
        assert!(tui.chat_visible());

        tui.viewport = (MIN_WIDTH_FOR_CHAT - 1, 30);
        assert!(!tui.chat_visible());
        tui.viewport = (MIN_WIDTH_FOR_CHAT, 30);
        assert!(tui.chat_visible());

        tui.chat_open = false;
        assert!(!tui.chat_visible());
    }

    #[test]
    fn test_navigate_syncs_sidebar() {
        let mut tui = TuiState::new(Config::default(), ViewState::Home);
        tui.navigate(ViewState::Contact);
        assert_eq!(tui.current_view(), ViewState::Contact);
        assert_eq!(ViewState::all()[tui.sidebar.selected], ViewState::Contact);
    }
}
