//! Layout resolver tests
//!
//! Item width is `(W - (columns - 1) * column_spacing) / columns` where `W` is
//! the viewport minus the horizontal insets. Placement fills the shortest
//! column first, and every call uses the width it is given.

use waterfall::logic::layout::{self, ContentInset, LayoutError, LayoutParams};
use waterfall::model::item::{LargePictureBean, ThumbnailBean};
use waterfall::Item;

fn default_params() -> LayoutParams {
    LayoutParams::default()
}

/// Test: two columns, spacing 6, insets 5 on a 366-wide viewport give 175
#[test]
fn test_item_width_default_params() {
    let style = layout::item_style(&default_params(), 366.0);
    assert_eq!(style.width, 175.0);
}

/// Test: a resize is picked up on the next call
#[test]
fn test_item_width_follows_viewport() {
    let params = default_params();
    assert_eq!(layout::item_style(&params, 366.0).width, 175.0);
    assert_eq!(layout::item_style(&params, 416.0).width, 200.0);
}

/// Test: single column takes the whole content width
#[test]
fn test_single_column_width() {
    let params = LayoutParams::new(1, 6.0, 6.0, ContentInset::default()).unwrap();
    assert_eq!(layout::item_style(&params, 320.0).width, 320.0);
}

/// Test: degenerate viewports never produce a negative width
#[test]
fn test_narrow_viewport_clamps_to_zero() {
    let style = layout::item_style(&default_params(), 8.0);
    assert_eq!(style.width, 0.0);
}

/// Test: invalid parameters are rejected up front
#[test]
fn test_invalid_params() {
    assert_eq!(
        LayoutParams::new(0, 6.0, 6.0, ContentInset::default()),
        Err(LayoutError::NoColumns)
    );
    assert!(matches!(
        LayoutParams::new(2, -1.0, 6.0, ContentInset::default()),
        Err(LayoutError::InvalidSpacing {
            name: "column_spacing",
            ..
        })
    ));
    assert!(LayoutParams::new(2, 6.0, f32::NAN, ContentInset::default()).is_err());
}

/// Test: recycling tag equals the style discriminant
#[test]
fn test_item_type_is_style() {
    let large = Item::LargePicture(LargePictureBean::default());
    let thumb = Item::Thumbnail(ThumbnailBean::default());

    assert_eq!(layout::item_type(&large).0, 2);
    assert_eq!(layout::item_type(&thumb).0, 5);
}

/// Test: each item goes under the shortest column
#[test]
fn test_place_items_shortest_column() {
    let params = default_params();
    let placed = layout::place_items(&params, 366.0, &[100.0, 40.0, 30.0, 30.0]);
    let columns: Vec<usize> = placed.placements.iter().map(|p| p.column).collect();

    // Right column keeps taking cards until it grows past the 100-tall one
    assert_eq!(columns, vec![0, 1, 1, 1]);
    assert_eq!(placed.placements[2].y, 46.0);
    assert_eq!(placed.placements[3].y, 82.0);
    assert_eq!(placed.placements[1].x, 186.0);
    assert_eq!(placed.content_height, 112.0);
}
