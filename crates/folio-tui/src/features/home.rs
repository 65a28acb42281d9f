//! Home view: artist header and "Popular Releases".

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::content;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use super::{FeatureUpdate, button, heading, muted, step};
use crate::common::truncate_with_ellipsis;
use crate::effects::UiEffect;
use crate::overlays::OverlayRequest;
use crate::state::TuiState;

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub selected: usize,
}

pub fn handle_key(state: &mut HomeState, key: KeyEvent) -> FeatureUpdate {
    let releases = content::popular_releases();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = step(state.selected, releases.len(), false);
            FeatureUpdate::none()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = step(state.selected, releases.len(), true);
            FeatureUpdate::none()
        }
        KeyCode::Enter => releases
            .get(state.selected)
            .and_then(|project| project.link)
            .map_or_else(FeatureUpdate::none, |url| {
                FeatureUpdate::effect(UiEffect::OpenBrowser {
                    url: url.to_string(),
                })
            }),
        KeyCode::Char('f') => FeatureUpdate::follow(),
        KeyCode::Char('m') => FeatureUpdate::open(OverlayRequest::ActionMenu),
        _ => FeatureUpdate::none(),
    }
}

/// Artist header shared by Home and About.
pub fn header_lines(tui: &TuiState) -> Vec<Line<'static>> {
    let accent = tui.accent();
    let profile = &content::PROFILE;
    let follow_label = if tui.followed { "Connected" } else { "Follow" };

    vec![
        Line::from(Span::styled(
            "✔ Verified Artist",
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(Span::styled(
            profile.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(muted(format!("{} · {}", profile.role, profile.school))),
        Line::from(vec![
            button("▶", false, accent),
            Span::raw(" "),
            button(follow_label, tui.followed, accent),
            Span::raw(" "),
            muted("[f] follow  [m] more"),
        ]),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let [header, title, list_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(header_lines(tui)), header);
    frame.render_widget(Paragraph::new(heading("Popular Releases", accent)), title);

    let width = list_area.width.saturating_sub(6) as usize;
    let items: Vec<ListItem> = content::popular_releases()
        .iter()
        .enumerate()
        .map(|(i, project)| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:>2}  ", i + 1), Style::default().fg(Color::Gray)),
                    Span::styled(
                        project.title,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(vec![
                    Span::raw("    "),
                    muted(truncate_with_ellipsis(
                        &format!("{} · {}", project.role, project.tags.join(", ")),
                        width,
                    )),
                ]),
            ])
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default();
    list_state.select(Some(tui.home.selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::mutations::StateMutation;

    #[test]
    fn test_enter_opens_linked_release() {
        let mut state = HomeState::default();
        let update = handle_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let expected = content::popular_releases()[0].link;
        match expected {
            Some(url) => assert_eq!(
                update.effects,
                vec![UiEffect::OpenBrowser {
                    url: url.to_string()
                }]
            ),
            None => assert!(update.effects.is_empty()),
        }
    }

    #[test]
    fn test_shortcuts_open_overlays() {
        let mut state = HomeState::default();
        let follow = handle_key(&mut state, KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE));
        assert!(matches!(follow.overlay, Some(OverlayRequest::Follow)));
        assert_eq!(follow.mutations, vec![StateMutation::SetFollowed(true)]);
        let menu = handle_key(&mut state, KeyEvent::new(KeyCode::Char('m'), KeyModifiers::NONE));
        assert!(matches!(menu.overlay, Some(OverlayRequest::ActionMenu)));
    }
}
