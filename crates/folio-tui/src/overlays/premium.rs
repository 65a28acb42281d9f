use crossterm::event::{KeyCode, KeyEvent};
use folio_core::content::PREMIUM_PERKS;
use folio_core::router::ViewState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::render_utils::{InputHint, OverlayConfig, render_choices, render_overlay};
use super::{OverlayUpdate, is_dismiss};
use crate::mutations::StateMutation;
use crate::state::{Focus, TuiState};

/// Call-to-action buttons and the view each one routes to.
const ACTIONS: &[(&str, ViewState)] = &[
    ("CONTACT ME NOW", ViewState::Contact),
    ("DOWNLOAD RESUME", ViewState::Cv),
];

#[derive(Debug, Clone, Default)]
pub struct PremiumState {
    pub selected: usize,
}

impl PremiumState {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        if is_dismiss(&key) {
            return OverlayUpdate::close();
        }
        match key.code {
            KeyCode::Up | KeyCode::Left => {
                self.selected = self.selected.saturating_sub(1);
                OverlayUpdate::stay()
            }
            KeyCode::Down | KeyCode::Right => {
                self.selected = (self.selected + 1).min(ACTIONS.len() - 1);
                OverlayUpdate::stay()
            }
            KeyCode::Enter => match ACTIONS.get(self.selected) {
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
        let accent = tui.accent();
        let hints = [
            InputHint::new("↑↓", "choose"),
            InputHint::new("Enter", "go"),
            InputHint::new("Esc", "maybe later"),
        ];
        let perks_height = PREMIUM_PERKS.len() as u16 * 2;
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Get Rham Premium",
                border_color: accent,
                width: 60,
                height: perks_height + ACTIONS.len() as u16 + 6,
                hints: &hints,
            },
        );

        let mut lines = vec![
            Line::from(Span::styled(
                "Unlock the full potential of your team.",
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
        ];
        for (headline, description) in PREMIUM_PERKS {
            lines.push(Line::from(vec![
                Span::styled("✓ ", Style::default().fg(accent)),
                Span::styled(
                    *headline,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {description}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        let text_height = (lines.len() as u16).min(layout.body.height);
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            Rect::new(layout.body.x, layout.body.y, layout.body.width, text_height),
        );

        let labels: Vec<&str> = ACTIONS.iter().map(|(label, _)| *label).collect();
        let buttons = Rect::new(
            layout.body.x,
            layout.body.y + text_height,
            layout.body.width,
            layout.body.height.saturating_sub(text_height),
        );
        render_choices(frame, buttons, &labels, self.selected, accent);
    }
}
