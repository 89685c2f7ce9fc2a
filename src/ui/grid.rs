use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
    Frame,
};

use waterfall::logic::card::{self, MAX_TITLE_LINES};
use waterfall::logic::layout::{self, LayoutParams};
use waterfall::model::Item;

/// A card's cell rectangle in content coordinates (row 0 is the top of the
/// feed, not of the screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRect {
    pub x: u16,
    pub y: u32,
    pub width: u16,
    pub height: u16,
}

impl CardRect {
    fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height as u32)
    }
}

/// Cell geometry for every loaded item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    cards: Vec<CardRect>,
    pub content_height: u32,
}

impl Grid {
    pub fn card(&self, index: usize) -> Option<CardRect> {
        self.cards.get(index).copied()
    }

    /// Indices of cards that intersect rows `top..top + height`
    pub fn visible(&self, top: u32, height: u16) -> Vec<usize> {
        let bottom = top.saturating_add(height as u32);
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.y < bottom && c.bottom() > top)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Measure and place `items` for a grid `viewport_width` cells wide
pub fn build_grid(params: &LayoutParams, viewport_width: f32, items: &[Item]) -> Grid {
    let width = layout::item_style(params, viewport_width).width.floor() as u16;
    let heights: Vec<f32> = items
        .iter()
        .map(|item| card::card_height(item, width) as f32)
        .collect();
    let placed = layout::place_items(params, viewport_width, &heights);

    let cards = placed
        .placements
        .iter()
        .map(|p| CardRect {
            x: p.x.floor() as u16,
            y: p.y.round() as u32,
            width,
            height: p.height as u16,
        })
        .collect();

    Grid {
        cards,
        content_height: placed.content_height.ceil() as u32,
    }
}

/// Render the part of the grid that falls inside the viewport
///
/// Cards straddling the top or bottom edge are drawn whole into an
/// off-screen buffer first and then clipped by copying only visible rows.
/// The buffer is addressed relative to the top of the first visible card.
pub fn render_waterfall(
    f: &mut Frame,
    area: Rect,
    items: &[Item],
    grid: &Grid,
    scroll_offset: u32,
    selected: Option<usize>,
) {
    let visible = grid.visible(scroll_offset, area.height);
    let cards: Vec<(usize, CardRect)> = visible
        .into_iter()
        .filter_map(|i| grid.card(i).map(|c| (i, c)))
        .filter(|(_, c)| c.width >= 3)
        .collect();

    let (Some(band_top), Some(band_bottom)) = (
        cards.iter().map(|(_, c)| c.y).min(),
        cards.iter().map(|(_, c)| c.bottom()).max(),
    ) else {
        return;
    };

    let band_height = u16::try_from(band_bottom - band_top).unwrap_or(u16::MAX);
    let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, band_height));
    for (index, rect) in &cards {
        let Some(item) = items.get(*index) else {
            continue;
        };
        let Ok(y) = u16::try_from(rect.y - band_top) else {
            continue;
        };
        let target = Rect::new(rect.x, y, rect.width, rect.height).intersection(canvas.area);
        render_card(&mut canvas, target, item, selected == Some(*index));
    }

    let buf = f.buffer_mut();
    for row in 0..area.height {
        let y = scroll_offset.saturating_add(row as u32);
        if y < band_top || y >= band_bottom {
            continue;
        }
        let Ok(canvas_y) = u16::try_from(y - band_top) else {
            continue;
        };
        for col in 0..area.width {
            let Some(cell) = canvas.cell((col, canvas_y)) else {
                continue;
            };
            if let Some(target) = buf.cell_mut((area.x + col, area.y + row)) {
                *target = cell.clone();
            }
        }
    }
}

fn render_card(buf: &mut Buffer, area: Rect, item: &Item, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let title_rows = card::wrapped_lines(item.title(), inner.width)
        .clamp(1, MAX_TITLE_LINES)
        .min(inner.height);
    Paragraph::new(item.title())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .render(Rect { height: title_rows, ..inner }, buf);

    let body_lines = body_lines(item, inner.width as usize);
    let body_area = Rect {
        y: inner.y + title_rows,
        height: (body_lines.len() as u16).min(inner.height - title_rows),
        ..inner
    };
    Paragraph::new(body_lines).render(body_area, buf);

    let sub_info = item.sub_info();
    let used = title_rows + body_area.height;
    if !sub_info.is_empty() && used < inner.height {
        let text = card::truncate_to_width(&sub_info.join(" · "), inner.width as usize);
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )))
        .render(
            Rect {
                y: inner.y + used,
                height: 1,
                ..inner
            },
            buf,
        );
    }
}

/// Placeholder art standing in for the pictures of each card variant
fn body_lines(item: &Item, width: usize) -> Vec<Line<'static>> {
    match item {
        Item::PictureGrid(bean) => {
            let count = bean.pic_list.len().max(1);
            let cell = (width + 1) / count;
            let tile = "▒".repeat(cell.saturating_sub(1).max(1));
            let row = vec![tile; count].join(" ");
            let row = card::truncate_to_width(&row, width);
            (0..3)
                .map(|_| Line::from(Span::styled(row.clone(), Style::default().fg(Color::Cyan))))
                .collect()
        }
        Item::LargePicture(_) => (0..5)
            .map(|_| Line::from(Span::styled("░".repeat(width), Style::default().fg(Color::Blue))))
            .collect(),
        Item::Thumbnail(_) => {
            let thumb = "▓".repeat(width.min(6));
            (0..2)
                .map(|_| Line::from(Span::styled(thumb.clone(), Style::default().fg(Color::Magenta))))
                .collect()
        }
        Item::Other { .. } => Vec::new(),
    }
}

#[cfg(test)]
impl Grid {
    fn len(&self) -> usize {
        self.cards.len()
    }
}
