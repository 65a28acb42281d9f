//! Player bar and the fullscreen "now playing" screen.

use folio_core::content::NOW_PLAYING;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::muted;
use crate::state::TuiState;

pub fn render_bar(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [track, hints] =
        Layout::horizontal([Constraint::Min(20), Constraint::Length(48)]).areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("♪ ", Style::default().fg(accent)),
            Span::styled(
                NOW_PLAYING.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            muted(format!(" · {}", NOW_PLAYING.artist)),
        ])),
        track,
    );
    frame.render_widget(
        Paragraph::new(muted("Ctrl+F fullscreen · Ctrl+T chat · Ctrl+C quit"))
            .alignment(Alignment::Right),
        hints,
    );
}

pub fn render_fullscreen(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let lines = vec![
        Line::from(muted("NOW PLAYING")),
        Line::default(),
        Line::from(Span::styled(
            NOW_PLAYING.title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(NOW_PLAYING.artist, Style::default().fg(accent))),
        Line::from(muted(NOW_PLAYING.mix)),
        Line::default(),
        Line::from(muted("Esc or Ctrl+F to exit")),
    ];
    let height = lines.len() as u16;
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        area,
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), middle);
}
