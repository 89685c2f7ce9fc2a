//! Scroll and selection calculations
//!
//! Pure functions for the terminal host's viewport: when the end of the
//! content is close enough to ask for the next page, and how far to scroll
//! to bring an item into view.

/// Whether the bottom of the viewport is within `threshold` rows of the end
///
/// Empty content never counts as "near the end"; the first page comes from
/// the mount load, not from scrolling.
///
/// # Examples
/// ```
/// use waterfall::logic::scroll::is_near_end;
///
/// // 40 rows of content, 20-row viewport scrolled to 17: bottom edge at 37
/// assert!(is_near_end(17, 20, 40, 4));
/// assert!(!is_near_end(10, 20, 40, 4));
/// ```
pub fn is_near_end(scroll_offset: u32, viewport_height: u16, content_height: u32, threshold: u16) -> bool {
    if content_height == 0 {
        return false;
    }
    let bottom = scroll_offset
        .saturating_add(viewport_height as u32)
        .saturating_add(threshold as u32);
    bottom >= content_height
}

/// Largest valid scroll offset
pub fn max_offset(viewport_height: u16, content_height: u32) -> u32 {
    content_height.saturating_sub(viewport_height as u32)
}

/// Smallest change to `scroll_offset` that shows the whole item
///
/// Items taller than the viewport are aligned to their top edge.
pub fn scroll_to_reveal(scroll_offset: u32, viewport_height: u16, item_top: u32, item_height: u16) -> u32 {
    let item_bottom = item_top.saturating_add(item_height as u32);
    let view_bottom = scroll_offset.saturating_add(viewport_height as u32);

    if item_top < scroll_offset || item_height >= viewport_height {
        item_top
    } else if item_bottom > view_bottom {
        item_bottom - viewport_height as u32
    } else {
        scroll_offset
    }
}

/// Move the selection by `delta` items, clamped to the collection
pub fn move_selection(current: Option<usize>, count: usize, delta: isize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let Some(current) = current else {
        return Some(0);
    };
    let next = current.saturating_add_signed(delta);
    Some(next.min(count - 1))
}
