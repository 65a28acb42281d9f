//! Library sidebar: one entry per view.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::router::ViewState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};

use super::{FeatureUpdate, panel_block, step};
use crate::mutations::StateMutation;
use crate::state::{Focus, TuiState};

#[derive(Debug, Clone, Default)]
pub struct SidebarState {
    pub selected: usize,
}

impl SidebarState {
    pub fn for_view(view: ViewState) -> Self {
        let selected = ViewState::all()
            .iter()
            .position(|v| *v == view)
            .unwrap_or(0);
        Self { selected }
    }
}

pub fn handle_key(state: &mut SidebarState, key: KeyEvent) -> FeatureUpdate {
    let len = ViewState::all().len();
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            state.selected = step(state.selected, len, false);
            FeatureUpdate::none()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.selected = step(state.selected, len, true);
            FeatureUpdate::none()
        }
        KeyCode::Enter | KeyCode::Right => match ViewState::all().get(state.selected) {
            Some(&view) => FeatureUpdate::mutations(vec![StateMutation::Navigate(view)]),
            None => FeatureUpdate::none(),
        },
        _ => FeatureUpdate::none(),
    }
}

fn icon(view: ViewState) -> &'static str {
    match view {
        ViewState::Home => "⌂",
        ViewState::Search => "⌕",
        ViewState::About => "☺",
        ViewState::Stack => "▤",
        ViewState::Projects => "♫",
        ViewState::Certificates => "★",
        ViewState::Cv => "▣",
        ViewState::Contact => "✉",
    }
}

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let focused = tui.focus == Focus::Sidebar;
    let block = panel_block("Your Library", focused, accent);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = tui.current_view();
    let items: Vec<ListItem> = ViewState::all()
        .iter()
        .map(|&view| {
            let style = if view == current {
                Style::default().fg(accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", icon(view)), style),
                Span::styled(view.label(), style),
            ]))
        })
        .collect();

    let highlight = if focused {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default();
    list_state.select(Some(tui.sidebar.selected));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn test_enter_navigates_to_selected_entry() {
        let mut state = SidebarState::default();
        handle_key(&mut state, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        handle_key(&mut state, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        let update = handle_key(&mut state, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            update.mutations,
            vec![StateMutation::Navigate(ViewState::About)]
        );
    }

    #[test]
    fn test_cursor_stops_at_ends() {
        let mut state = SidebarState::default();
        handle_key(&mut state, KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(state.selected, 0);
        for _ in 0..20 {
            handle_key(&mut state, KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        }
        assert_eq!(state.selected, ViewState::all().len() - 1);
    }
}
