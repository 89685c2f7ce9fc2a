use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the pull-to-refresh header
///
/// `refreshing` is true while a refresh is in flight; otherwise the header
/// is only armed and shows the pull hint.
pub fn render_refresh_header(f: &mut Frame, area: Rect, text: &str, refreshing: bool) {
    let (icon, color) = if refreshing {
        ("⟳ ", Color::Cyan)
    } else {
        ("↓ ", Color::Yellow)
    };
    let line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(text.to_string(), Style::default().fg(color)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Render the banner above the grid
pub fn render_banner(f: &mut Frame, area: Rect, item_count: usize) {
    let line = Line::from(vec![
        Span::styled(
            " Waterfall ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} items", item_count),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
