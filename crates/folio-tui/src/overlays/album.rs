use folio_core::content::JOURNEY_ALBUMS;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::render_utils::{InputHint, OverlayConfig, render_overlay, render_separator};
use crate::state::TuiState;

/// Story dialog for one journey album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumState {
    pub index: usize,
}

impl AlbumState {
    pub fn render(&self, frame: &mut Frame, area: Rect, tui: &TuiState) {
        let Some(album) = JOURNEY_ALBUMS.get(self.index) else {
            return;
        };
        let accent = tui.accent();
        let hints = [InputHint::new("Esc", "close")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: album.title,
                border_color: accent,
                width: 64,
                height: 14,
                hints: &hints,
            },
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "ALBUM",
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" · {}", album.year), Style::default().fg(Color::Gray)),
            ])),
            Rect::new(layout.body.x, layout.body.y, layout.body.width, 1),
        );
        render_separator(frame, layout.body, 1);

        let story = Rect::new(
            layout.body.x,
            layout.body.y + 2,
            layout.body.width,
            layout.body.height.saturating_sub(2),
        );
        frame.render_widget(
            Paragraph::new(album.story)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: true }),
            story,
        );
    }
}
