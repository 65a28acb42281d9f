use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::common::text::wrap_text;
use crate::state::TuiState;

const WIDTH: u16 = 52;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub message: String,
}

impl AlertState {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let hints = [InputHint::new("Enter", "ok")];
        let text_lines = wrap_text(&self.message, WIDTH.saturating_sub(4) as usize).len() as u16;
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Notice",
                border_color: tui.accent(),
                width: WIDTH,
                height: text_lines + 4,
                hints: &hints,
            },
        );
        frame.render_widget(
            Paragraph::new(self.message.as_str())
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            layout.body,
        );
    }
}
