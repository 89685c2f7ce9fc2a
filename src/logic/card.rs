//! Card measurement
//!
//! The terminal host measures cards itself; these helpers decide how many
//! rows a card needs at a given column width and how text is cut to fit.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::Item;

/// Title never wraps past this many lines
pub const MAX_TITLE_LINES: u16 = 3;

/// Rows taken by the card border (top + bottom)
const BORDER_ROWS: u16 = 2;

/// Rows below the title for each variant's body
fn body_rows(item: &Item) -> u16 {
    match item {
        Item::PictureGrid(_) => 3,
        Item::LargePicture(_) => 5,
        Item::Thumbnail(_) => 2,
        Item::Other { .. } => 0,
    }
}

/// Lines `text` occupies when wrapped at `width` cells
pub fn wrapped_lines(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let total = text.width() as u64;
    if total == 0 {
        return 1;
    }
    total.div_ceil(width as u64).min(u16::MAX as u64) as u16
}

/// Total rows for a card drawn `width` cells wide, borders included
pub fn card_height(item: &Item, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let title = wrapped_lines(item.title(), inner).clamp(1, MAX_TITLE_LINES);
    let sub_info = if item.sub_info().is_empty() { 0 } else { 1 };

    BORDER_ROWS + title + body_rows(item) + sub_info
}

/// Cut `text` to at most `max_width` display cells, ending in an ellipsis
/// when something was dropped
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
