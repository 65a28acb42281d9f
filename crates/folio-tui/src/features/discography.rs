//! Projects view ("Discography").

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::content;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::{FeatureUpdate, muted, step};
use crate::common::text::wrap_text;
use crate::effects::UiEffect;
use crate::state::{Focus, TuiState};

#[derive(Debug, Clone, Default)]
pub struct DiscographyState {
    pub selected: usize,
}

pub fn handle_key(state: &mut DiscographyState, key: KeyEvent) -> FeatureUpdate {
    let projects = content::PROJECTS;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = step(state.selected, projects.len(), false);
            FeatureUpdate::none()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = step(state.selected, projects.len(), true);
            FeatureUpdate::none()
        }
        // Projects without a link are not clickable.
        KeyCode::Enter => match projects.get(state.selected).and_then(|p| p.link) {
            Some(url) => FeatureUpdate::effect(UiEffect::OpenBrowser {
                url: url.to_string(),
            }),
            None => FeatureUpdate::none(),
        },
        _ => FeatureUpdate::none(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let text_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = content::PROJECTS
        .iter()
        .map(|project| {
            let mut lines = vec![Line::from(vec![
                Span::styled(
                    project.title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                muted(project.role),
                Span::raw(if project.link.is_some() { "  ↗" } else { "" }),
            ])];
            for line in wrap_text(project.description, text_width) {
                lines.push(Line::from(Span::styled(
                    line,
                    Style::default().fg(Color::Gray),
                )));
            }
            lines.push(Line::from(Span::styled(
                project.tags.join(" · "),
                Style::default().fg(accent),
            )));
            lines.push(Line::default());
            ListItem::new(lines)
        })
        .collect();

    let highlight = if tui.focus == Focus::Main {
        Style::default().bg(Color::Rgb(0x28, 0x28, 0x28))
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");
    let mut list_state = ListState::default();
    list_state.select(Some(tui.discography.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_enter_on_unlinked_project_is_noop() {
        let index = content::PROJECTS
            .iter()
            .position(|p| p.link.is_none())
            .unwrap();
        let mut state = DiscographyState { selected: index };
        let update = handle_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(update.effects.is_empty());
    }

    #[test]
    fn test_enter_on_linked_project_opens_browser() {
        let (index, project) = content::PROJECTS
            .iter()
            .enumerate()
            .find(|(_, p)| p.link.is_some())
            .unwrap();
        let mut state = DiscographyState { selected: index };
        let update = handle_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            update.effects,
            vec![UiEffect::OpenBrowser {
                url: project.link.unwrap().to_string()
            }]
        );
    }
}
