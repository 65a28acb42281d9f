//! CV view: download or preview the résumé.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::{FeatureUpdate, button, heading, muted};
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::state::{Focus, TuiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CvButton {
    #[default]
    Download,
    Preview,
}

#[derive(Debug, Clone, Default)]
pub struct CvState {
    pub selected: CvButton,
    /// Where the last successful download landed.
    pub saved_to: Option<PathBuf>,
}

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> FeatureUpdate {
    match key.code {
        KeyCode::Left | KeyCode::Right => {
            tui.cv.selected = match tui.cv.selected {
                CvButton::Download => CvButton::Preview,
                CvButton::Preview => CvButton::Download,
            };
            FeatureUpdate::none()
        }
        KeyCode::Char('d') => download(tui),
        KeyCode::Char('p') => FeatureUpdate::effect(UiEffect::PreviewResume),
        KeyCode::Enter => match tui.cv.selected {
            CvButton::Download => download(tui),
            CvButton::Preview => FeatureUpdate::effect(UiEffect::PreviewResume),
        },
        _ => FeatureUpdate::none(),
    }
}

fn download(tui: &mut TuiState) -> FeatureUpdate {
    if tui.is_running(TaskKind::Resume) {
        return FeatureUpdate::none();
    }
    let task = tui.begin_task(TaskKind::Resume);
    FeatureUpdate::effect(UiEffect::DownloadResume { task })
}

pub fn render(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let accent = tui.accent();
    let focused = tui.focus == Focus::Main;
    let downloading = tui.is_running(TaskKind::Resume);

    let download_label = if downloading {
        format!("{} DOWNLOADING", tui.spinner())
    } else {
        "⤓ DOWNLOAD".to_string()
    };

    let mut lines = vec![
        heading("Downloadable Track", accent),
        Line::from(Span::styled(
            tui.config.resume.file_name.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(muted(
            "Education, leadership, projects and skills in one document.",
        )),
        Line::default(),
        Line::from(vec![
            button(
                &download_label,
                focused && tui.cv.selected == CvButton::Download,
                accent,
            ),
            Span::raw("  "),
            button(
                "◉ PREVIEW",
                focused && tui.cv.selected == CvButton::Preview,
                accent,
            ),
        ]),
        Line::default(),
    ];

    if let Some(path) = &tui.cv.saved_to {
        lines.push(Line::from(muted(format!("Saved to {}", path.display()))));
    }
    if tui.config.resume.effective_url().is_none() {
        lines.push(Line::from(muted(
            "Set url in [resume] of the config to enable these buttons.",
        )));
    }
    lines.push(Line::from(muted("←→ choose · Enter run · [d] download · [p] preview")));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use folio_core::config::Config;
    use folio_core::router::ViewState;

    use super::*;

    #[test]
    fn test_download_runs_once_at_a_time() {
        let mut tui = TuiState::new(Config::default(), ViewState::Cv);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let first = handle_key(&mut tui, enter);
        assert!(matches!(
            first.effects.as_slice(),
            [UiEffect::DownloadResume { .. }]
        ));
        assert!(handle_key(&mut tui, enter).effects.is_empty());
    }

    #[test]
    fn test_preview_button() {
        let mut tui = TuiState::new(Config::default(), ViewState::Cv);
        handle_key(&mut tui, KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        let update = handle_key(&mut tui, KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(update.effects, vec![UiEffect::PreviewResume]);
    }
}
