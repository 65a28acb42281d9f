//! Text utilities for TUI rendering and single-line editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Keeps the tail of `text` that fits in `max_width`, prefixed with `…`.
///
/// Used for input lines so the cursor end stays visible.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width + 1 > max_width {
            break;
        }
        width += ch_width;
        kept.push(ch);
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            let gap = usize::from(!line.is_empty());

            if line_width + gap + word_width <= width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                line_width += gap + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            for grapheme in word.graphemes(true) {
                let g_width = grapheme.width();
                if line_width + g_width > width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push_str(grapheme);
                line_width += g_width;
            }
        }

        lines.push(line);
    }

    lines
}

/// Applies an editing key to a single-line buffer.
///
/// Returns true when the key was consumed.
pub fn edit_line(buffer: &mut String, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if !ctrl => {
            buffer.push(c);
            true
        }
        KeyCode::Backspace => {
            pop_grapheme(buffer);
            true
        }
        KeyCode::Char('w') if ctrl => {
            delete_word(buffer);
            true
        }
        _ => false,
    }
}

/// Removes the last user-perceived character.
pub fn pop_grapheme(buffer: &mut String) {
    if let Some((idx, _)) = buffer.grapheme_indices(true).next_back() {
        buffer.truncate(idx);
    }
}

fn delete_word(buffer: &mut String) {
    let trimmed_len = buffer.trim_end().len();
    buffer.truncate(trimmed_len);
    let cut = buffer
        .unicode_word_indices()
        .next_back()
        .map_or(0, |(idx, _)| idx);
    buffer.truncate(cut);
}

/// Strips newlines so pasted text fits a single-line field.
pub fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
