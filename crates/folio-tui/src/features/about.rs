//! About view: biography, journey albums and "On Tour".

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::content;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{FeatureUpdate, heading, home, muted, step};
use crate::overlays::OverlayRequest;
use crate::state::{Focus, TuiState};

#[derive(Debug, Clone, Default)]
pub struct AboutState {
    pub selected: usize,
}

pub fn handle_key(state: &mut AboutState, key: KeyEvent) -> FeatureUpdate {
    let len = content::JOURNEY_ALBUMS.len();
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => {
            state.selected = step(state.selected, len, false);
            FeatureUpdate::none()
        }
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => {
            state.selected = step(state.selected, len, true);
            FeatureUpdate::none()
        }
        KeyCode::Enter => FeatureUpdate::open(OverlayRequest::Album {
            index: state.selected,
        }),
        KeyCode::Char('f') => FeatureUpdate::follow(),
        _ => FeatureUpdate::none(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let [header, body] = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(home::header_lines(tui)), header);

    let mut lines = vec![
        heading(content::BIOGRAPHY_HEADLINE, accent),
        Line::default(),
    ];
    for paragraph in content::BIOGRAPHY {
        lines.push(Line::from(Span::raw(*paragraph)));
        lines.push(Line::default());
    }

    lines.push(heading("The Journey", accent));
    let focused = tui.focus == Focus::Main;
    for (i, album) in content::JOURNEY_ALBUMS.iter().enumerate() {
        let selected = focused && i == tui.about.selected;
        let marker = if selected { "▶ " } else { "  " };
        let title_style = if selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(accent)),
            Span::styled(album.title, title_style),
            Span::raw("  "),
            muted(album.year),
        ]));
    }
    lines.push(Line::from(muted("  [Enter] read the story  [f] follow")));
    lines.push(Line::default());

    lines.push(heading("On Tour", accent));
    for date in content::ON_TOUR {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", date.date),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(date.title, Style::default().fg(Color::White)),
            Span::raw(" "),
            muted(date.note),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_enter_opens_selected_album() {
        let mut state = AboutState::default();
        handle_key(&mut state, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        let update = handle_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(
            update.overlay,
            Some(OverlayRequest::Album { index: 1 })
        ));
    }
}
