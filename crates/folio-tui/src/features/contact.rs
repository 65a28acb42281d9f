//! Contact view: social links and the e-mail form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::contact::{ContactField, ContactForm};
use folio_core::content;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{FeatureUpdate, button, heading, muted};
use crate::common::TaskKind;
use crate::common::text::{edit_line, truncate_start_with_ellipsis};
use crate::effects::UiEffect;
use crate::state::{Focus, TuiState};

/// Alert text for a failed send.
pub const SEND_FAILED: &str = "Failed to send email. Please try again later.";

#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub field: ContactField,
}

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> FeatureUpdate {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let on_send = tui.contact.field == ContactField::Send;

    match key.code {
        KeyCode::Char('s') if ctrl => submit(tui),
        KeyCode::Enter if on_send => submit(tui),
        KeyCode::Up => {
            tui.contact.field = tui.contact.field.prev();
            FeatureUpdate::none()
        }
        KeyCode::Down | KeyCode::Enter => {
            tui.contact.field = tui.contact.field.next();
            FeatureUpdate::none()
        }
        _ => {
            let field = tui.contact.field;
            tui.contact.form.edit(field, |buffer| edit_line(buffer, key));
            FeatureUpdate::none()
        }
    }
}

/// Validates and, when valid and idle, issues exactly one send.
pub fn submit(tui: &mut TuiState) -> FeatureUpdate {
    if tui.is_running(TaskKind::Email) {
        return FeatureUpdate::none();
    }
    let Some(mail) = tui.contact.form.prepare() else {
        tui.contact.field = ContactField::Email;
        return FeatureUpdate::none();
    };
    let task = tui.begin_task(TaskKind::Email);
    FeatureUpdate::effect(UiEffect::SendEmail { task, mail })
}

/// Clears the form after a delivered message.
pub fn on_sent(state: &mut ContactState) {
    state.form.clear();
    state.field = ContactField::Email;
}

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let state = &tui.contact;
    let focused = tui.focus == Focus::Main;
    let sending = tui.is_running(TaskKind::Email);
    let field_width = area.width.saturating_sub(16) as usize;

    let mut lines = vec![heading("Booking & Inquiries", accent)];
    for link in content::SOCIAL_LINKS {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", link.label), Style::default().fg(accent)),
            muted(link.url),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:<10}", "Email"), Style::default().fg(accent)),
        muted(content::EMAIL),
    ]));
    lines.push(Line::default());
    lines.push(heading("Send a message", accent));

    let rows = [
        (ContactField::Email, "Your Email", "you@example.com"),
        (ContactField::Subject, "Subject", "Collaboration"),
        (ContactField::Body, "Message", "Tell Rham about your project..."),
    ];
    for (field, label, placeholder) in rows {
        let active = focused && state.field == field;
        let value = state.form.field(field).unwrap_or_default();
        let label_style = if active {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![Span::styled(format!("{label:<12}"), label_style)];
        if value.is_empty() {
            spans.push(muted(placeholder));
        } else {
            spans.push(Span::styled(
                truncate_start_with_ellipsis(value, field_width),
                Style::default().fg(Color::White),
            ));
        }
        if active {
            spans.push(Span::styled("█", Style::default().fg(accent)));
        }
        lines.push(Line::from(spans));

        if field == ContactField::Email
            && let Some(error) = &state.form.error
        {
            lines.push(Line::from(Span::styled(
                format!("{:12}{error}", ""),
                Style::default().fg(Color::Red),
            )));
        }
    }

    lines.push(Line::default());
    let label = if sending {
        format!("{} Sending...", tui.spinner())
    } else {
        "Send Message".to_string()
    };
    lines.push(Line::from(vec![
        Span::raw(format!("{:12}", "")),
        button(&label, focused && state.field == ContactField::Send, accent),
    ]));
    lines.push(Line::default());
    lines.push(Line::from(muted("↑↓ move · Enter next/send · Ctrl+S send")));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
