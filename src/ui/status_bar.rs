use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use waterfall::{FetchError, FetchKind};

/// Render the loading footer below the grid
pub fn render_footer(f: &mut Frame, area: Rect, text: &str) {
    let footer = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

/// Build the status line text (extracted for testability)
fn build_status_line(
    item_count: usize,
    selected: Option<usize>,
    in_flight: Option<FetchKind>,
    last_error: Option<&FetchError>,
) -> String {
    let mut metrics = Vec::new();

    metrics.push(format!("{} items", item_count));

    if let Some(idx) = selected {
        metrics.push(format!("Selected: {}/{}", idx + 1, item_count));
    }

    if let Some(kind) = in_flight {
        metrics.push(format!("Fetching: {}", kind));
    }

    if let Some(error) = last_error {
        metrics.push(format!("Last error: {}", error));
    }

    metrics.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    item_count: usize,
    selected: Option<usize>,
    in_flight: Option<FetchKind>,
    last_error: Option<&FetchError>,
) {
    let text = build_status_line(item_count, selected, in_flight, last_error);
    let style = if last_error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(Paragraph::new(text).style(style), area);
}
