//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never
//! mutate state or return effects.

use folio_core::router::ViewState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{
    about, awards, chat, contact, cv, discography, home, library, panel_block, player, search,
    sidebar,
};
use crate::overlays::OverlayExt;
use crate::state::{AppState, Focus, TuiState};

const SIDEBAR_WIDTH: u16 = 26;
const CHAT_WIDTH: u16 = 38;
const PLAYER_HEIGHT: u16 = 2;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let tui = &app.tui;

    let [body, player_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(PLAYER_HEIGHT)]).areas(area);

    let show_chat = tui.chat_visible_at(body.width);
    let [sidebar_area, main_area, chat_area] = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Min(20),
        Constraint::Length(if show_chat { CHAT_WIDTH } else { 0 }),
    ])
    .areas(body);

    sidebar::render(frame, sidebar_area, tui);

    if tui.router.player_fullscreen() {
        player::render_fullscreen(frame, main_area, tui);
    } else {
        render_main(frame, main_area, tui);
    }

    if show_chat {
        chat::render(frame, chat_area, tui);
    }

    player::render_bar(frame, player_area, tui);

    app.overlay.render(frame, area, tui);
}

fn render_main(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let view = tui.current_view();
    let block = panel_block(view.title(), tui.focus == Focus::Main, tui.accent());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match view {
        ViewState::Home => home::render(frame, inner, tui),
        ViewState::Search => search::render(frame, inner, tui),
        ViewState::About => about::render(frame, inner, tui),
        ViewState::Stack => library::render(frame, inner, tui),
        ViewState::Projects => discography::render(frame, inner, tui),
        ViewState::Certificates => awards::render(frame, inner, tui),
        ViewState::Cv => cv::render(frame, inner, tui),
        ViewState::Contact => contact::render(frame, inner, tui),
    }

    // Key hints for the focused panel sit on the block's bottom edge.
    if tui.focus == Focus::Main && area.height > 2 {
        let hint = Rect::new(area.x + 2, area.y + area.height - 1, area.width.saturating_sub(4), 1);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    " Tab ",
                    Style::default()
                        .fg(tui.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    "focus · Ctrl+P premium · Ctrl+U menu · Ctrl+O more ",
                    Style::default().fg(Color::DarkGray),
                ),
            ])),
            hint,
        );
    }
}

#[cfg(test)]
mod tests {
    use folio_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::overlays::{Overlay, OverlayRequest};

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_every_view_renders() {
        for &view in ViewState::all() {
            let app = AppState::new(Config::default(), view);
            let screen = draw(&app, 140, 40);
            assert!(screen.contains(view.title()), "{view:?} title missing");
        }
    }

    #[test]
    fn test_fullscreen_shows_now_playing() {
        let mut app = AppState::new(Config::default(), ViewState::Home);
        app.tui.router.set_player_fullscreen(true);
        let screen = draw(&app, 140, 40);
        assert!(screen.contains("NOW PLAYING"));
        assert!(screen.contains("Ed Sheeran Mix"));
    }

    #[test]
    fn test_overlay_draws_on_top() {
        let mut app = AppState::new(Config::default(), ViewState::Home);
        app.overlay = Some(Overlay::open(OverlayRequest::EmailSent));
        let screen = draw(&app, 140, 40);
        assert!(screen.contains("Message Sent!"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = AppState::new(Config::default(), ViewState::Contact);
        app.overlay = Some(Overlay::open(OverlayRequest::Premium));
        draw(&app, 10, 4);
    }
}
