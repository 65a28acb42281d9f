//! Tech Stack view ("Your Library").

use folio_core::content;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{heading, muted};
use crate::state::TuiState;

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let mut lines = Vec::new();

    for category in content::SKILLS {
        lines.push(heading(category.name, accent));
        let mut spans = Vec::new();
        for (i, skill) in category.skills.iter().enumerate() {
            if i > 0 {
                spans.push(muted(" · "));
            }
            spans.push(Span::styled(*skill, Style::default().fg(Color::White)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
