use crossterm::event::{KeyCode, KeyEvent};
use folio_core::router::ViewState;
use ratatui::Frame;
use ratatui::layout::Rect;

use super::render_utils::{InputHint, OverlayConfig, render_choices, render_overlay};
use super::{OverlayUpdate, is_dismiss};
use crate::mutations::StateMutation;
use crate::state::{Focus, TuiState};

const ITEMS: &[(&str, ViewState)] = &[
    ("Discography", ViewState::Projects),
    ("Tech Stack", ViewState::Stack),
    ("Awards", ViewState::Certificates),
    ("About Rham", ViewState::About),
    ("Contact", ViewState::Contact),
    ("CV", ViewState::Cv),
];

#[derive(Debug, Clone, Default)]
pub struct ProfileMenuState {
    pub selected: usize,
}

impl ProfileMenuState {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        if is_dismiss(&key) {
            return OverlayUpdate::close();
        }
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(ITEMS.len() - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match ITEMS.get(self.selected) {
                Some(&(_, view)) => OverlayUpdate::close().with_mutations(vec![
                    StateMutation::Navigate(view),
                    StateMutation::Focus(Focus::Main),
                ]),
                None => OverlayUpdate::close(),
            },
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "go"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Profile",
                border_color: tui.accent(),
                width: 32,
                height: ITEMS.len() as u16 + 3,
                hints: &hints,
            },
        );
        let labels: Vec<&str> = ITEMS.iter().map(|(label, _)| *label).collect();
        render_choices(frame, layout.body, &labels, self.selected, tui.accent());
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_every_item_navigates_to_its_view() {
        for (index, &(_, view)) in ITEMS.iter().enumerate() {
            let mut menu = ProfileMenuState { selected: index };
            let update = menu.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
            assert_eq!(update.mutations[0], StateMutation::Navigate(view));
        }
    }
}
