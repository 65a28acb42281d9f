//! Drawing helpers shared by the dialogs and the text inputs.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListItem, ListState, Paragraph};

use crate::common::truncate_start_with_ellipsis;

const CURSOR: &str = "█";

/// Centers a `width` x `height` popup inside `area`, shrinking it to fit.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Size, title and footer hints of one dialog.
pub struct OverlayConfig<'a> {
    pub title: &'a str,
    pub border_color: Color,
    pub width: u16,
    pub height: u16,
    pub hints: &'a [InputHint<'a>],
}

pub struct OverlayLayout {
    pub popup: Rect,
    /// Inside of the border, minus the hint row.
    pub body: Rect,
}

/// Clears the popup region, draws the frame and hints, and returns where the
/// dialog content goes.
pub fn render_overlay(frame: &mut Frame, area: Rect, config: &OverlayConfig<'_>) -> OverlayLayout {
    let popup = calculate_overlay_area(area, config.width, config.height);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .border_style(Style::default().fg(config.border_color))
        .title(Span::styled(
            format!(" {} ", config.title),
            Style::default()
                .fg(config.border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut body = inner;
    if !config.hints.is_empty() && inner.height > 0 {
        body.height -= 1;
        let footer = Rect::new(inner.x, inner.y + body.height, inner.width, 1);
        render_hints(frame, footer, config.hints, config.border_color);
    }

    OverlayLayout { popup, body }
}

/// One "key action" pair in a dialog footer.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Draws `hints` centered on the single row `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], key_color: Color) {
    let dim = Style::default().fg(Color::DarkGray);
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, hint)| {
            let separator = (i > 0).then(|| Span::styled(" · ", dim));
            separator.into_iter().chain([
                Span::styled(hint.key, Style::default().fg(key_color)),
                Span::styled(format!(" {}", hint.action), dim),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// A single-row text input such as the search box or the chat composer.
pub struct InputLine<'a> {
    pub value: &'a str,
    pub placeholder: &'a str,
    pub prompt: &'a str,
    pub accent: Color,
    /// The cursor is only drawn while the input owns the keyboard.
    pub focused: bool,
}

/// Renders `prompt value█`, or the dimmed placeholder when empty.
///
/// Long values keep their tail visible so the cursor never scrolls away.
pub fn render_input_line(frame: &mut Frame, area: Rect, input: &InputLine<'_>) {
    let prompt_width = input.prompt.chars().count() as u16;
    let room = area.width.saturating_sub(prompt_width + 1) as usize;

    let mut spans = vec![Span::styled(
        input.prompt,
        Style::default().fg(input.accent),
    )];
    let cursor = input
        .focused
        .then(|| Span::styled(CURSOR, Style::default().fg(input.accent)));

    if input.value.is_empty() {
        spans.extend(cursor);
        spans.push(Span::styled(
            truncate_start_with_ellipsis(input.placeholder, room),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(input.value, room),
            Style::default().fg(Color::White),
        ));
        spans.extend(cursor);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Horizontal rule across `area` at row `y_offset`.
pub fn render_separator(frame: &mut Frame, area: Rect, y_offset: u16) {
    if y_offset >= area.height {
        return;
    }
    let rule = Span::styled(
        "─".repeat(area.width as usize),
        Style::default().fg(Color::DarkGray),
    );
    frame.render_widget(
        Paragraph::new(Line::from(rule)),
        Rect::new(area.x, area.y + y_offset, area.width, 1),
    );
}

/// Vertical button list for the menus; the selected entry is filled.
pub fn render_choices(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    selected: usize,
    accent: Color,
) {
    let items: Vec<ListItem> = labels
        .iter()
        .map(|label| ListItem::new(Span::styled(label.to_string(), Style::default().fg(Color::White))))
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
