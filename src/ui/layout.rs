use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutInfo {
    /// Pull-to-refresh header (if open or armed)
    pub header_area: Option<Rect>,
    /// Banner above the grid (if the feed has items)
    pub banner_area: Option<Rect>,
    /// Waterfall grid
    pub grid_area: Rect,
    /// Loading footer below the grid (if the feed has items)
    pub footer_area: Option<Rect>,
    /// Hotkey legend (top border + one line)
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(
    terminal_size: Rect,
    header_visible: bool,
    banner_visible: bool,
    footer_visible: bool,
) -> LayoutInfo {
    let row = |visible: bool| if visible { 1 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(row(header_visible)),
            Constraint::Length(row(banner_visible)),
            Constraint::Min(1),
            Constraint::Length(row(footer_visible)),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(terminal_size);

    let shown = |visible: bool, area: Rect| if visible { Some(area) } else { None };

    LayoutInfo {
        header_area: shown(header_visible, chunks[0]),
        banner_area: shown(banner_visible, chunks[1]),
        grid_area: chunks[2],
        footer_area: shown(footer_visible, chunks[3]),
        legend_area: chunks[4],
        status_area: chunks[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feed_hides_chrome() {
        let info = calculate_layout(Rect::new(0, 0, 80, 24), false, false, false);
        assert!(info.header_area.is_none());
        assert!(info.banner_area.is_none());
        assert!(info.footer_area.is_none());
        // 24 rows - legend 2 - status 1
        assert_eq!(info.grid_area.height, 21);
    }

    #[test]
    fn test_all_chrome_visible() {
        let info = calculate_layout(Rect::new(0, 0, 80, 24), true, true, true);
        assert_eq!(info.header_area.map(|a| a.y), Some(0));
        assert_eq!(info.banner_area.map(|a| a.y), Some(1));
        assert_eq!(info.grid_area.y, 2);
        assert_eq!(info.grid_area.height, 18);
        assert_eq!(info.status_area.y, 23);
    }
}
