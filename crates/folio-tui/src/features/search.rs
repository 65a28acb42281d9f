//! Search view: query input, "Browse All" tiles, result groups and the
//! assistant insight box.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::search::{self, CATEGORY_TILES, SearchView};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use super::{FeatureUpdate, heading, muted};
use crate::common::TaskKind;
use crate::common::text::edit_line;
use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::overlays::render_utils::{InputLine, render_input_line};
use crate::state::{Focus, TuiState};

const PLACEHOLDER: &str = "What do you want to play?";
const INSIGHT_PROMPT: &str = "Press ENTER to ask Gemini AI for a deep dive on this topic...";
const TILE_COLUMNS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub query: String,
    pub insight: Option<String>,
    pub tile: usize,
}

impl SearchState {
    pub fn view(&self) -> SearchView {
        search::search(&self.query)
    }
}

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> FeatureUpdate {
    let state = &mut tui.search;

    if state.query.is_empty() {
        let last = CATEGORY_TILES.len() - 1;
        match key.code {
            KeyCode::Left => {
                state.tile = state.tile.saturating_sub(1);
                return FeatureUpdate::none();
            }
            KeyCode::Right => {
                state.tile = (state.tile + 1).min(last);
                return FeatureUpdate::none();
            }
            KeyCode::Up => {
                state.tile = state.tile.saturating_sub(TILE_COLUMNS);
                return FeatureUpdate::none();
            }
            KeyCode::Down => {
                state.tile = (state.tile + TILE_COLUMNS).min(last);
                return FeatureUpdate::none();
            }
            KeyCode::Enter => {
                return match CATEGORY_TILES.get(state.tile) {
                    Some(tile) => FeatureUpdate::mutations(vec![
                        StateMutation::Navigate(tile.view),
                        StateMutation::Focus(Focus::Main),
                    ]),
                    None => FeatureUpdate::none(),
                };
            }
            _ => {}
        }
    }

    match key.code {
        KeyCode::Enter => request_insight(tui),
        KeyCode::Esc => {
            set_query(state, String::new());
            FeatureUpdate::none()
        }
        _ => {
            let mut query = state.query.clone();
            if edit_line(&mut query, key) {
                set_query(state, query);
            }
            FeatureUpdate::none()
        }
    }
}

/// Replaces the query. A changed query discards the previous insight.
pub fn set_query(state: &mut SearchState, query: String) {
    if query != state.query {
        state.query = query;
        state.insight = None;
    }
}

fn request_insight(tui: &mut TuiState) -> FeatureUpdate {
    let query = tui.search.query.trim().to_string();
    if query.is_empty() || tui.is_running(TaskKind::Insight) {
        return FeatureUpdate::none();
    }
    tui.search.insight = None;
    let task = tui.begin_task(TaskKind::Insight);
    FeatureUpdate::effect(UiEffect::FetchInsight { task, query })
}

/// Stores an insight if it still belongs to the current query.
pub fn handle_insight(state: &mut SearchState, query: &str, text: String) {
    if state.query.trim() == query {
        state.insight = Some(text);
    }
}

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let [input_area, _, body] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);

    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: &tui.search.query,
            placeholder: PLACEHOLDER,
            prompt: "⌕ ",
            accent,
            focused: tui.focus == Focus::Main,
        },
    );

    match tui.search.view() {
        SearchView::Browse => render_tiles(frame, body, tui),
        view @ SearchView::Results { .. } => render_results(frame, body, tui, &view),
    }
}

fn render_tiles(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let [title, grid] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new(heading("Browse All", accent)), title);

    let rows = CATEGORY_TILES.len().div_ceil(TILE_COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Length(3); rows]).split(grid);
    for (row, row_area) in row_areas.iter().enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, TILE_COLUMNS as u32); TILE_COLUMNS])
                .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let index = row * TILE_COLUMNS + col;
            let Some(tile) = CATEGORY_TILES.get(index) else {
                continue;
            };
            let selected = index == tui.search.tile && tui.focus == Focus::Main;
            let style = if selected {
                Style::default().bg(accent).fg(Color::Black)
            } else {
                Style::default().fg(Color::White)
            };
            let block = Block::bordered().border_style(Style::default().fg(if selected {
                accent
            } else {
                Color::DarkGray
            }));
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    tile.title,
                    style.add_modifier(Modifier::BOLD),
                )))
                .block(block),
                *cell,
            );
        }
    }
}

fn render_results(frame: &mut Frame, area: Rect, tui: &TuiState, view: &SearchView) {
    let accent = tui.accent();
    let [insight_area, results_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

    let insight_text = if tui.is_running(TaskKind::Insight) {
        Line::from(muted(format!("{} Asking Gemini...", tui.spinner())))
    } else if let Some(insight) = &tui.search.insight {
        Line::from(Span::raw(insight.clone()))
    } else {
        Line::from(muted(INSIGHT_PROMPT))
    };
    let insight_block = Block::bordered()
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            " ✦ AI Insight ",
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(
        Paragraph::new(insight_text)
            .block(insight_block)
            .wrap(Wrap { trim: true }),
        insight_area,
    );

    if view.is_empty_results() {
        frame.render_widget(
            Paragraph::new(muted(format!(
                "No results found for \"{}\"",
                tui.search.query
            ))),
            results_area,
        );
        return;
    }

    let SearchView::Results {
        projects,
        skills,
        achievements,
    } = view
    else {
        return;
    };

    let mut lines = Vec::new();
    if !projects.is_empty() {
        lines.push(heading(search::PROJECTS_SECTION, accent));
        for project in projects {
            lines.push(Line::from(vec![
                Span::styled("♫ ", Style::default().fg(accent)),
                Span::styled(project.title, Style::default().fg(Color::White)),
                Span::raw("  "),
                muted(project.tags.join(", ")),
            ]));
        }
        lines.push(Line::default());
    }
    if !skills.is_empty() {
        lines.push(heading(search::SKILLS_SECTION, accent));
        lines.push(Line::from(Span::raw(skills.join(" · "))));
        lines.push(Line::default());
    }
    if !achievements.is_empty() {
        lines.push(heading(search::ACHIEVEMENTS_SECTION, accent));
        for achievement in achievements {
            lines.push(Line::from(vec![
                Span::styled("★ ", Style::default().fg(Color::Yellow)),
                Span::raw(*achievement),
            ]));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        results_area,
    );
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use folio_core::config::Config;
    use folio_core::router::ViewState;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_empty_query_enter_follows_tile() {
        let mut tui = TuiState::new(Config::default(), ViewState::Search);
        handle_key(&mut tui, key(KeyCode::Down));
        let update = handle_key(&mut tui, key(KeyCode::Enter));
        assert_eq!(
            update.mutations,
            vec![
                StateMutation::Navigate(CATEGORY_TILES[TILE_COLUMNS].view),
                StateMutation::Focus(Focus::Main),
            ]
        );
    }

    #[test]
    fn test_enter_with_query_requests_insight_once() {
        let mut tui = TuiState::new(Config::default(), ViewState::Search);
        for c in "java".chars() {
            handle_key(&mut tui, key(KeyCode::Char(c)));
        }
        let first = handle_key(&mut tui, key(KeyCode::Enter));
        assert!(matches!(
            first.effects.as_slice(),
            [UiEffect::FetchInsight { query, .. }] if query == "java"
        ));
        let second = handle_key(&mut tui, key(KeyCode::Enter));
        assert!(second.effects.is_empty());
    }

    #[test]
    fn test_blank_query_does_not_request_insight() {
        let mut tui = TuiState::new(Config::default(), ViewState::Search);
        handle_key(&mut tui, key(KeyCode::Char(' ')));
        let update = handle_key(&mut tui, key(KeyCode::Enter));
        assert!(update.effects.is_empty());
        assert!(!tui.is_running(TaskKind::Insight));
    }

    #[test]
    fn test_stale_insight_is_dropped() {
        let mut state = SearchState::default();
        set_query(&mut state, "java".to_string());
        handle_insight(&mut state, "react", "nope".to_string());
        assert_eq!(state.insight, None);
        handle_insight(&mut state, "java", "yes".to_string());
        assert_eq!(state.insight.as_deref(), Some("yes"));

        set_query(&mut state, "jav".to_string());
        assert_eq!(state.insight, None);
    }
}
