use crossterm::event::{KeyCode, KeyEvent};
use folio_core::content::SOURCE_CODE_URL;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::render_utils::{InputHint, OverlayConfig, render_choices, render_overlay};
use super::{OverlayUpdate, is_dismiss};
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::state::TuiState;

pub const PROFILE_COPIED: &str = "Profile link copied to clipboard!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    ShareProfile,
    ChangeTheme,
    PrintPortfolio,
    SourceCode,
}

const ACTIONS: &[Action] = &[
    Action::ShareProfile,
    Action::ChangeTheme,
    Action::PrintPortfolio,
    Action::SourceCode,
];

impl Action {
    fn label(self) -> &'static str {
        match self {
            Action::ShareProfile => "Share Profile",
            Action::ChangeTheme => "Change Theme",
            Action::PrintPortfolio => "Print Portfolio",
            Action::SourceCode => "Source Code",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActionMenuState {
    pub selected: usize,
}

impl ActionMenuState {
    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        if is_dismiss(&key) {
            return OverlayUpdate::close();
        }
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(ACTIONS.len() - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match ACTIONS.get(self.selected) {
                Some(&action) => run(action, tui),
                None => OverlayUpdate::close(),
            },
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "run"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "More",
                border_color: tui.accent(),
                width: 36,
                height: ACTIONS.len() as u16 + 3,
                hints: &hints,
            },
        );

        let theme_label = format!("Change Theme ({})", tui.theme.toggled().display_name());
        let labels: Vec<&str> = ACTIONS
            .iter()
            .map(|action| match action {
                Action::ChangeTheme => theme_label.as_str(),
                other => other.label(),
            })
            .collect();
        render_choices(frame, layout.body, &labels, self.selected, tui.accent());
    }
}

fn run(action: Action, tui: &TuiState) -> OverlayUpdate {
    match action {
        Action::ShareProfile => {
            OverlayUpdate::close().with_ui_effects(vec![UiEffect::CopyToClipboard {
                text: tui.config.profile_url.clone(),
                notice: PROFILE_COPIED.to_string(),
            }])
        }
        Action::ChangeTheme => {
            let theme = tui.theme.toggled();
            OverlayUpdate::close()
                .with_mutations(vec![StateMutation::SetTheme(theme)])
                .with_ui_effects(vec![UiEffect::PersistTheme { theme }])
        }
        Action::PrintPortfolio => {
            OverlayUpdate::close().with_ui_effects(vec![UiEffect::ExportPortfolio])
        }
        Action::SourceCode => OverlayUpdate::close().with_ui_effects(vec![UiEffect::OpenBrowser {
            url: SOURCE_CODE_URL.to_string(),
        }]),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use folio_core::config::Config;
    use folio_core::router::ViewState;
    use folio_core::theme::Theme;

    use super::*;

    fn select(index: usize, tui: &TuiState) -> OverlayUpdate {
        let mut menu = ActionMenuState { selected: index };
        menu.handle_key(tui, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    #[test]
    fn test_change_theme_toggles_and_persists() {
        let tui = TuiState::new(Config::default(), ViewState::Home);
        assert_eq!(tui.theme, Theme::Classic);
        let update = select(1, &tui);
        assert_eq!(update.mutations, vec![StateMutation::SetTheme(Theme::Sakura)]);
        assert_eq!(
            update.effects,
            vec![UiEffect::PersistTheme {
                theme: Theme::Sakura
            }]
        );
    }

    #[test]
    fn test_share_copies_profile_url() {
        let tui = TuiState::new(Config::default(), ViewState::Home);
        let update = select(0, &tui);
        assert_eq!(
            update.effects,
            vec![UiEffect::CopyToClipboard {
                text: tui.config.profile_url.clone(),
                notice: PROFILE_COPIED.to_string(),
            }]
        );
    }
}
