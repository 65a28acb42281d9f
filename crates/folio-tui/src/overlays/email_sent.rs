use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::render_utils::{OverlayConfig, render_overlay};
use crate::features::button;
use crate::state::TuiState;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let layout = render_overlay(
        frame,
        area,
        &OverlayConfig {
            title: "Message Sent!",
            border_color: accent,
            width: 46,
            height: 9,
            hints: &[],
        },
    );

    let lines = vec![
        Line::from(Span::styled(
            "✔",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "You've been successfully emailed rham.",
            Style::default().fg(Color::White),
        )),
        Line::default(),
        Line::from(button("AWESOME", true, accent)),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        layout.body,
    );
}
