use crate::App;
use ratatui::Frame;
use waterfall::ViewEvent;

use super::{grid, header, layout, legend, status_bar};

/// Main render function - orchestrates all UI rendering
///
/// Also records the frame geometry on the app: the grid is re-laid out at
/// the current width, and the viewport size feeds the end-of-content check.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let props = app.coordinator.props();
    let header_visible = props.refresh_indicator_open || app.pull_armed;
    let layout_info = layout::calculate_layout(
        size,
        header_visible,
        props.banner_visible,
        props.footer_visible,
    );
    let grid_area = layout_info.grid_area;

    // Keep the coordinator's width in step with the grid area
    let width = grid_area.width as f32;
    if width != app.coordinator.viewport_width() {
        app.coordinator.handle(ViewEvent::Resized { width });
    }

    let snapshot = app.coordinator.controller().snapshot();
    app.grid = grid::build_grid(app.coordinator.layout(), width, &snapshot.items);
    app.ui
        .set_viewport(grid_area.height, app.grid.content_height);
    app.reveal_selection();

    if let Some(area) = layout_info.header_area {
        header::render_refresh_header(
            f,
            area,
            &props.header_text,
            props.refresh_indicator_open,
        );
    }

    if let Some(area) = layout_info.banner_area {
        header::render_banner(f, area, props.item_count);
    }

    grid::render_waterfall(
        f,
        grid_area,
        &snapshot.items,
        &app.grid,
        app.ui.scroll_offset,
        app.ui.selected,
    );

    if let Some(area) = layout_info.footer_area {
        status_bar::render_footer(f, area, &props.footer_text);
    }

    legend::render_legend(f, layout_info.legend_area, app.ui.vim_mode, app.pull_armed);

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        props.item_count,
        app.ui.selected,
        snapshot.in_flight,
        snapshot.last_error.as_ref(),
    );
}
