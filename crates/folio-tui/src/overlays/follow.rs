use crossterm::event::{KeyCode, KeyEvent};
use folio_core::content;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::render_utils::{InputHint, OverlayConfig, render_choices, render_overlay};
use super::{OverlayUpdate, is_dismiss};
use crate::effects::UiEffect;
use crate::state::TuiState;

const DONE: &str = "DONE";

#[derive(Debug, Clone, Default)]
pub struct FollowState {
    pub selected: usize,
}

/// Social destinations followed by the public e-mail, as (label, url).
fn destinations() -> Vec<(&'static str, String)> {
    let mut links: Vec<(&'static str, String)> = content::SOCIAL_LINKS
        .iter()
        .filter(|link| matches!(link.label, "LinkedIn" | "GitHub"))
        .map(|link| (link.label, link.url.to_string()))
        .collect();
    links.push(("Email", format!("mailto:{}", content::EMAIL)));
    links
}

impl FollowState {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        if is_dismiss(&key) {
            return OverlayUpdate::close();
        }
        let links = destinations();
        let count = links.len() + 1;
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(count - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match links.into_iter().nth(self.selected) {
                Some((_, url)) => {
                    OverlayUpdate::stay().with_ui_effects(vec![UiEffect::OpenBrowser { url }])
                }
                None => OverlayUpdate::close(),
            },
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let accent = tui.accent();
        let links = destinations();
        let hints = [
            InputHint::new("↑↓", "navigate"),
            InputHint::new("Enter", "open"),
            InputHint::new("Esc", "close"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Connect with Rham",
                border_color: accent,
                width: 44,
                height: links.len() as u16 + 7,
                hints: &hints,
            },
        );

        let intro = Rect::new(layout.body.x, layout.body.y, layout.body.width, 2);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Follow the artist across platforms.",
                Style::default().fg(Color::Gray),
            ))),
            intro,
        );

        let mut labels: Vec<&str> = links.iter().map(|(label, _)| *label).collect();
        labels.push(DONE);
        let list_area = Rect::new(
            layout.body.x,
            layout.body.y + 2,
            layout.body.width,
            layout.body.height.saturating_sub(2),
        );
        render_choices(frame, list_area, &labels, self.selected, accent);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_email_entry_opens_mailto() {
        let mut state = FollowState::default();
        let email_index = destinations().len() - 1;
        for _ in 0..email_index {
            state.handle_key(key(KeyCode::Down));
        }
        let update = state.handle_key(key(KeyCode::Enter));
        assert_eq!(update.transition, OverlayTransition::Stay);
        assert_eq!(
            update.effects,
            vec![UiEffect::OpenBrowser {
                url: format!("mailto:{}", content::EMAIL)
            }]
        );
    }

    #[test]
    fn test_done_closes() {
        let mut state = FollowState::default();
        for _ in 0..10 {
            state.handle_key(key(KeyCode::Down));
        }
        let update = state.handle_key(key(KeyCode::Enter));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.mutations.is_empty());
    }
}
