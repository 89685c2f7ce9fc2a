// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into header, banner, grid, footer, legend, status
// - render: Main orchestration function that coordinates all rendering
// - grid: Lays out and draws the card grid with vertical scrolling
// - header: Pull-to-refresh header and the banner above the grid
// - legend: Renders hotkey legend
// - status_bar: Loading footer and bottom status bar

pub mod grid;
pub mod header;
pub mod layout;
pub mod legend;
pub mod render;
pub mod status_bar;

// Re-export main render function for convenience
pub use render::render;
