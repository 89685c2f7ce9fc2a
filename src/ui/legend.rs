use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, pull_armed: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    // Navigation keys (different for vim mode)
    if vim_mode {
        hotkey_spans.extend(vec![
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("gg/G", Style::default().fg(Color::Yellow)),
            Span::raw(":First/Last  "),
            Span::styled("^d/^u", Style::default().fg(Color::Yellow)),
            Span::raw(":½Page  "),
        ]);
    } else {
        hotkey_spans.extend(vec![
            Span::styled("↑/↓", Style::default().fg(Color::Yellow)),
            Span::raw(":Nav  "),
            Span::styled("g/G", Style::default().fg(Color::Yellow)),
            Span::raw(":First/Last  "),
            Span::styled("PgUp/PgDn", Style::default().fg(Color::Yellow)),
            Span::raw(":½Page  "),
        ]);
    }

    // Pulling at the top arms the header; the hint tells how to release it
    let pull_hint = if pull_armed {
        ":Release to refresh  "
    } else {
        ":Pull at top  "
    };
    let up_key = if vim_mode { "k" } else { "↑" };

    hotkey_spans.extend(vec![
        Span::styled(up_key, Style::default().fg(Color::Yellow)),
        Span::raw(pull_hint),
        Span::styled("r", Style::default().fg(Color::Yellow)),
        Span::raw(":Refresh  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(":Focus  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, pull_armed: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(vim_mode, pull_armed)))
        .block(Block::default().borders(Borders::TOP))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false });
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    #[test]
    fn test_legend_vim_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, false));
        assert!(text.contains("gg/G"), "got: {}", text);
        assert!(text.contains("k:Pull at top"), "got: {}", text);
        assert!(!text.contains("PgUp"), "got: {}", text);
    }

    #[test]
    fn test_legend_default_keys() {
        let text = spans_to_text(&build_hotkey_spans(false, false));
        assert!(text.contains("↑/↓"), "got: {}", text);
        assert!(text.contains("r:Refresh"), "got: {}", text);
        assert!(text.ends_with("q:Quit"), "got: {}", text);
    }

    #[test]
    fn test_legend_release_hint_when_armed() {
        let text = spans_to_text(&build_hotkey_spans(false, true));
        assert!(text.contains("Release to refresh"), "got: {}", text);
        assert!(!text.contains("Pull at top"), "got: {}", text);
    }
}
