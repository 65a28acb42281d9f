//! Assistant chat panel ("Reum").

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::chat::{ChatLog, ChatMessage, ChatRole};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{FeatureUpdate, muted, panel_block};
use crate::common::TaskKind;
use crate::common::text::{edit_line, wrap_text};
use crate::effects::UiEffect;
use crate::overlays::render_utils::{InputLine, render_input_line};
use crate::state::{Focus, TuiState};

const PLACEHOLDER: &str = "Ask about Rham...";
const ASSISTANT_NAME: &str = "Reum";

#[derive(Debug, Clone, Default)]
pub struct ChatState {
    pub log: ChatLog,
    pub input: String,
}

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> FeatureUpdate {
    if key.code == KeyCode::Enter {
        return submit(tui);
    }
    edit_line(&mut tui.chat.input, key);
    FeatureUpdate::none()
}

/// Appends the user message and asks the assistant, unless the input is
/// blank or a reply is still pending.
pub fn submit(tui: &mut TuiState) -> FeatureUpdate {
    let text = tui.chat.input.trim().to_string();
    if text.is_empty() || tui.is_running(TaskKind::Chat) {
        return FeatureUpdate::none();
    }
    tui.chat.input.clear();
    tui.chat.log.push(ChatMessage::user(text.clone()));
    let task = tui.begin_task(TaskKind::Chat);
    FeatureUpdate::effect(UiEffect::SendChat { task, text })
}

/// Records the assistant's answer (reply text or fallback).
pub fn handle_reply(state: &mut ChatState, text: String) {
    state.log.push(ChatMessage::model(text));
}

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let focused = tui.focus == Focus::Chat;
    let block = panel_block(ASSISTANT_NAME, focused, accent);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [messages_area, typing_area, input_area, footer_area] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let width = messages_area.width.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for message in tui.chat.log.messages() {
        lines.extend(message_lines(message, width, accent));
        lines.push(Line::default());
    }

    // Newest messages stay pinned to the bottom.
    let height = messages_area.height as usize;
    let skip = lines.len().saturating_sub(height);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    let pad = height.saturating_sub(visible.len());
    let mut padded = vec![Line::default(); pad];
    padded.extend(visible);
    frame.render_widget(Paragraph::new(padded), messages_area);

    if tui.is_running(TaskKind::Chat) {
        frame.render_widget(
            Paragraph::new(muted(format!("{} {ASSISTANT_NAME} is typing...", tui.spinner()))),
            typing_area,
        );
    }

    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: &tui.chat.input,
            placeholder: PLACEHOLDER,
            prompt: "› ",
            accent,
            focused,
        },
    );

    frame.render_widget(
        Paragraph::new(muted("Powered by Gemini")).alignment(Alignment::Center),
        footer_area,
    );
}

fn message_lines(message: &ChatMessage, width: usize, accent: Color) -> Vec<Line<'static>> {
    let (name, name_style, alignment) = match message.role {
        ChatRole::User => (
            "You",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Alignment::Right,
        ),
        ChatRole::Model => (
            ASSISTANT_NAME,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
            Alignment::Left,
        ),
    };
    let time = message.timestamp.format("%H:%M").to_string();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(name, name_style),
            Span::raw(" "),
            muted(time),
        ])
        .alignment(alignment),
    ];
    let body_width = (width * 4 / 5).max(10);
    for line in wrap_text(&message.text, body_width) {
        lines.push(
            Line::from(Span::styled(line, Style::default().fg(Color::Gray))).alignment(alignment),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use folio_core::config::Config;
    use folio_core::router::ViewState;

    use super::*;

    fn type_text(tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_key(tui, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_submit_appends_user_message_and_sends() {
        let mut tui = TuiState::new(Config::default(), ViewState::Home);
        type_text(&mut tui, "  hi there ");
        let update = handle_key(&mut tui, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        assert!(matches!(
            update.effects.as_slice(),
            [UiEffect::SendChat { text, .. }] if text == "hi there"
        ));
        assert_eq!(tui.chat.log.len(), 2);
        assert_eq!(tui.chat.log.last().map(|m| m.role), Some(ChatRole::User));
        assert!(tui.chat.input.is_empty());
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut tui = TuiState::new(Config::default(), ViewState::Home);
        type_text(&mut tui, "   ");
        let update = submit(&mut tui);
        assert!(update.effects.is_empty());
        assert_eq!(tui.chat.log.len(), 1);
    }

    #[test]
    fn test_submit_while_pending_is_ignored() {
        let mut tui = TuiState::new(Config::default(), ViewState::Home);
        type_text(&mut tui, "first");
        submit(&mut tui);
        type_text(&mut tui, "second");
        let update = submit(&mut tui);
        assert!(update.effects.is_empty());
        assert_eq!(tui.chat.input, "second");
        assert_eq!(tui.chat.log.len(), 2);
    }
}
