//! Feature slices for the TUI (state, key handling and render per slice).

pub mod about;
pub mod awards;
pub mod chat;
pub mod contact;
pub mod cv;
pub mod discography;
pub mod home;
pub mod library;
pub mod player;
pub mod search;
pub mod sidebar;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding};

use crate::effects::UiEffect;
use crate::mutations::StateMutation;
use crate::overlays::OverlayRequest;

/// Result of a feature key handler.
#[derive(Debug, Default)]
pub struct FeatureUpdate {
    pub effects: Vec<UiEffect>,
    pub mutations: Vec<StateMutation>,
    pub overlay: Option<OverlayRequest>,
}

impl FeatureUpdate {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn effect(effect: UiEffect) -> Self {
        Self {
            effects: vec![effect],
            ..Self::default()
        }
    }

    pub fn mutations(mutations: Vec<StateMutation>) -> Self {
        Self {
            mutations,
            ..Self::default()
        }
    }

    pub fn open(request: OverlayRequest) -> Self {
        Self {
            overlay: Some(request),
            ..Self::default()
        }
    }

    /// The Follow button: the header reads "Connected" from the first press,
    /// then the social links dialog opens.
    pub fn follow() -> Self {
        Self {
            mutations: vec![StateMutation::SetFollowed(true)],
            overlay: Some(OverlayRequest::Follow),
            ..Self::default()
        }
    }
}

/// Bordered panel whose border lights up with the accent when focused.
pub fn panel_block(title: &str, focused: bool, accent: Color) -> Block<'static> {
    let border = if focused { accent } else { Color::DarkGray };
    Block::bordered()
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1))
}

/// Section heading used inside views.
pub fn heading(text: &str, accent: Color) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ))
}

/// Dimmed secondary text.
pub fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

/// Inline button label, filled with the accent when selected.
pub fn button(label: &str, selected: bool, accent: Color) -> Span<'static> {
    let style = if selected {
        Style::default()
            .bg(accent)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    };
    Span::styled(format!(" {label} "), style)
}

/// Moves a list cursor by one within `len` items.
pub fn step(selected: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (selected + 1).min(len - 1)
    } else {
        selected.saturating_sub(1)
    }
}
