//! Layout calculation logic
//!
//! Pure functions that turn viewport width, column count and spacing into
//! per-item geometry. Nothing here is cached: callers pass the current
//! viewport width on every call so a resize takes effect immediately.

use serde::Deserialize;
use thiserror::Error;

use crate::model::{Item, ItemType};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("number of columns must be at least 1")]
    NoColumns,

    #[error("{name} must be a finite value >= 0, got {value}")]
    InvalidSpacing { name: &'static str, value: f32 },
}

/// Padding between the viewport edge and the content
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ContentInset {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

/// Fixed for the lifetime of the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    number_of_columns: usize,
    column_spacing: f32,
    inter_item_spacing: f32,
    content_inset: ContentInset,
}

impl LayoutParams {
    pub fn new(
        number_of_columns: usize,
        column_spacing: f32,
        inter_item_spacing: f32,
        content_inset: ContentInset,
    ) -> Result<Self, LayoutError> {
        if number_of_columns == 0 {
            return Err(LayoutError::NoColumns);
        }
        check_spacing("column_spacing", column_spacing)?;
        check_spacing("inter_item_spacing", inter_item_spacing)?;
        check_spacing("content_inset.top", content_inset.top)?;
        check_spacing("content_inset.left", content_inset.left)?;
        check_spacing("content_inset.bottom", content_inset.bottom)?;
        check_spacing("content_inset.right", content_inset.right)?;

        Ok(Self {
            number_of_columns,
            column_spacing,
            inter_item_spacing,
            content_inset,
        })
    }

    pub fn number_of_columns(&self) -> usize {
        self.number_of_columns
    }

    pub fn column_spacing(&self) -> f32 {
        self.column_spacing
    }

    pub fn inter_item_spacing(&self) -> f32 {
        self.inter_item_spacing
    }

    pub fn content_inset(&self) -> ContentInset {
        self.content_inset
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            number_of_columns: 2,
            column_spacing: 6.0,
            inter_item_spacing: 6.0,
            content_inset: ContentInset {
                top: 0.0,
                left: 5.0,
                bottom: 0.0,
                right: 5.0,
            },
        }
    }
}

fn check_spacing(name: &'static str, value: f32) -> Result<(), LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidSpacing { name, value })
    }
}

/// Size handed to every item, whatever its column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    pub width: f32,
}

/// Where one item lands in the waterfall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    pub column: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Result of placing a whole collection
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WaterfallLayout {
    pub placements: Vec<ItemPlacement>,
    /// Bottom of the tallest column, including both vertical insets
    pub content_height: f32,
}

/// Width left for columns once the horizontal insets are removed
pub fn content_width(params: &LayoutParams, viewport_width: f32) -> f32 {
    (viewport_width - params.content_inset.left - params.content_inset.right).max(0.0)
}

/// Per-item width for the current viewport
///
/// `W = viewport - inset.left - inset.right`, spacing is applied between
/// columns only, and the rest is shared evenly.
///
/// # Examples
/// ```
/// use waterfall::logic::layout::{item_style, ContentInset, LayoutParams};
///
/// let params = LayoutParams::new(
///     2,
///     6.0,
///     6.0,
///     ContentInset { top: 0.0, left: 5.0, bottom: 0.0, right: 5.0 },
/// )
/// .unwrap();
/// assert_eq!(item_style(&params, 366.0).width, 175.0);
/// ```
pub fn item_style(params: &LayoutParams, viewport_width: f32) -> ItemStyle {
    let columns = params.number_of_columns as f32;
    let gutters = (params.number_of_columns - 1) as f32 * params.column_spacing;
    let width = (content_width(params, viewport_width) - gutters) / columns;

    ItemStyle {
        width: width.max(0.0),
    }
}

/// Recycling tag for an item
pub fn item_type(item: &Item) -> ItemType {
    item.item_type()
}

/// Left edge of a column
pub fn column_x(params: &LayoutParams, column: usize, item_width: f32) -> f32 {
    params.content_inset.left + column as f32 * (item_width + params.column_spacing)
}

/// Place measured items into columns
///
/// Each item goes to the currently shortest column, lowest index on ties, so
/// the first `number_of_columns` items fill the first row left to right.
pub fn place_items(params: &LayoutParams, viewport_width: f32, heights: &[f32]) -> WaterfallLayout {
    let width = item_style(params, viewport_width).width;
    let top = params.content_inset.top;
    let mut column_bottoms = vec![top; params.number_of_columns];
    let mut placements = Vec::with_capacity(heights.len());

    for &height in heights {
        let column = shortest_column(&column_bottoms);
        let y = column_bottoms[column];

        placements.push(ItemPlacement {
            column,
            x: column_x(params, column, width),
            y,
            width,
            height,
        });
        column_bottoms[column] = y + height + params.inter_item_spacing;
    }

    let tallest = column_bottoms
        .iter()
        .zip(count_per_column(&placements, params.number_of_columns))
        .map(|(&bottom, count)| {
            // Trailing spacing only exists between items
            if count > 0 {
                bottom - params.inter_item_spacing
            } else {
                bottom
            }
        })
        .fold(top, f32::max);

    WaterfallLayout {
        placements,
        content_height: tallest + params.content_inset.bottom,
    }
}

fn shortest_column(column_bottoms: &[f32]) -> usize {
    let mut best = 0;
    for (i, &bottom) in column_bottoms.iter().enumerate().skip(1) {
        if bottom < column_bottoms[best] {
            best = i;
        }
    }
    best
}

fn count_per_column(placements: &[ItemPlacement], columns: usize) -> Vec<usize> {
    let mut counts = vec![0; columns];
    for placement in placements {
        counts[placement.column] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inset(left: f32, right: f32) -> ContentInset {
        ContentInset {
            top: 0.0,
            left,
            bottom: 0.0,
            right,
        }
    }

    #[test]
    fn test_item_width_two_columns() {
        let params = LayoutParams::new(2, 6.0, 6.0, inset(5.0, 5.0)).unwrap();
        assert_eq!(item_style(&params, 366.0).width, 175.0);
    }

    #[test]
    fn test_item_width_single_column_ignores_spacing() {
        let params = LayoutParams::new(1, 50.0, 0.0, inset(10.0, 10.0)).unwrap();
        assert_eq!(item_style(&params, 100.0).width, 80.0);
    }

    #[test]
    fn test_item_width_follows_viewport() {
        let params = LayoutParams::default();
        let portrait = item_style(&params, 366.0).width;
        let landscape = item_style(&params, 806.0).width;
        assert_eq!(portrait, 175.0);
        assert_eq!(landscape, 395.0);
    }

    #[test]
    fn test_item_width_never_negative() {
        let params = LayoutParams::new(3, 10.0, 0.0, inset(5.0, 5.0)).unwrap();
        assert_eq!(item_style(&params, 4.0).width, 0.0);
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert_eq!(
            LayoutParams::new(0, 6.0, 6.0, ContentInset::default()),
            Err(LayoutError::NoColumns)
        );
    }

    #[test]
    fn test_negative_spacing_rejected() {
        assert!(matches!(
            LayoutParams::new(2, -1.0, 6.0, ContentInset::default()),
            Err(LayoutError::InvalidSpacing {
                name: "column_spacing",
                ..
            })
        ));
        assert!(LayoutParams::new(2, 0.0, f32::NAN, ContentInset::default()).is_err());
    }

    #[test]
    fn test_column_x() {
        let params = LayoutParams::default();
        assert_eq!(column_x(&params, 0, 175.0), 5.0);
        assert_eq!(column_x(&params, 1, 175.0), 186.0);
    }

    #[test]
    fn test_place_items_fills_shortest_column() {
        let params = LayoutParams::new(2, 0.0, 1.0, ContentInset::default()).unwrap();
        let layout = place_items(&params, 20.0, &[10.0, 4.0, 3.0, 5.0]);
        let columns: Vec<usize> = layout.placements.iter().map(|p| p.column).collect();

        // 10 -> col 0, 4 -> col 1, 3 -> col 1 (bottom 5), 5 -> col 1 (bottom 9)
        assert_eq!(columns, vec![0, 1, 1, 1]);
        assert_eq!(layout.placements[2].y, 5.0);
        assert_eq!(layout.placements[3].y, 9.0);
        assert_eq!(layout.content_height, 14.0);
    }

    #[test]
    fn test_place_items_first_row_left_to_right() {
        let params = LayoutParams::new(3, 2.0, 2.0, ContentInset::default()).unwrap();
        let layout = place_items(&params, 31.0, &[5.0, 5.0, 5.0]);

        let xs: Vec<f32> = layout.placements.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 11.0, 22.0]);
        assert!(layout.placements.iter().all(|p| p.y == 0.0));
        assert!(layout.placements.iter().all(|p| p.width == 9.0));
    }

    #[test]
    fn test_place_items_applies_vertical_inset() {
        let params = LayoutParams::new(
            2,
            0.0,
            0.0,
            ContentInset {
                top: 3.0,
                left: 0.0,
                bottom: 2.0,
                right: 0.0,
            },
        )
        .unwrap();
        let layout = place_items(&params, 10.0, &[4.0]);

        assert_eq!(layout.placements[0].y, 3.0);
        assert_eq!(layout.content_height, 9.0);
    }

    #[test]
    fn test_place_nothing() {
        let layout = place_items(&LayoutParams::default(), 100.0, &[]);
        assert!(layout.placements.is_empty());
        assert_eq!(layout.content_height, 0.0);
    }
}
