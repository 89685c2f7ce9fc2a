//! UI Model
//!
//! State of the terminal host view: selection, scroll position and keymap
//! preferences. Feed data is not kept here; it is read from the data
//! controller on every frame.

use crate::logic::scroll;

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Index of the highlighted card
    pub selected: Option<usize>,

    /// First content row shown at the top of the grid
    pub scroll_offset: u32,

    /// Rows available to the grid in the last frame
    pub viewport_height: u16,

    /// Height of the laid-out content in the last frame
    pub content_height: u32,

    pub vim_mode: bool,
    pub vim_command_state: VimCommandState,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            selected: None,
            scroll_offset: 0,
            viewport_height: 0,
            content_height: 0,
            vim_mode,
            vim_command_state: VimCommandState::None,
            should_quit: false,
        }
    }

    /// Record the geometry of the frame just drawn
    pub fn set_viewport(&mut self, viewport_height: u16, content_height: u32) {
        self.viewport_height = viewport_height;
        self.content_height = content_height;
        self.scroll_offset = self
            .scroll_offset
            .min(scroll::max_offset(viewport_height, content_height));
    }

    /// Bring a card spanning `top..top + height` fully into view
    pub fn reveal(&mut self, top: u32, height: u16) {
        let offset = scroll::scroll_to_reveal(self.scroll_offset, self.viewport_height, top, height);
        self.scroll_offset = offset.min(scroll::max_offset(self.viewport_height, self.content_height));
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = scroll::max_offset(self.viewport_height, self.content_height) as i64;
        self.scroll_offset = (self.scroll_offset as i64 + delta as i64).clamp(0, max) as u32;
    }

    /// Whether the grid bottom is within `threshold` rows of the content end
    pub fn is_near_end(&self, threshold: u16) -> bool {
        scroll::is_near_end(
            self.scroll_offset,
            self.viewport_height,
            self.content_height,
            threshold,
        )
    }

    /// Keep the selection valid after the collection changed size
    pub fn clamp_selection(&mut self, item_count: usize) {
        self.selected = match self.selected {
            _ if item_count == 0 => None,
            Some(idx) => Some(idx.min(item_count - 1)),
            None => Some(0),
        };
    }
}
