//! Navigation orchestration methods
//!
//! Moving the selection through the grid and scrolling the viewport. Pulling
//! past the top arms the refresh header; pulling again releases it.

use waterfall::logic::scroll;
use waterfall::ViewEvent;

use crate::App;

impl App {
    fn item_count(&self) -> usize {
        self.coordinator.controller().item_count()
    }

    pub(crate) fn next_item(&mut self) {
        self.move_by(1);
    }

    pub(crate) fn previous_item(&mut self) {
        let at_top = self.ui.scroll_offset == 0 && self.ui.selected.unwrap_or(0) == 0;
        if at_top {
            self.pull();
            return;
        }
        self.move_by(-1);
    }

    pub(crate) fn first_item(&mut self) {
        if self.item_count() == 0 {
            return;
        }
        self.select(0);
    }

    pub(crate) fn last_item(&mut self) {
        let count = self.item_count();
        if count == 0 {
            return;
        }
        self.select(count - 1);
    }

    /// Scroll by half a viewport without touching the selection
    pub(crate) fn half_page(&mut self, down: bool) {
        let step = (self.ui.viewport_height / 2).max(1) as i32;
        self.ui.scroll_by(if down { step } else { -step });
        self.viewport_moved = true;
    }

    /// Tap the selected card
    pub(crate) fn activate_selected(&mut self) {
        if let Some(index) = self.ui.selected {
            self.dispatch(ViewEvent::ItemTap(index));
        }
    }

    /// Release the refresh header straight away
    pub(crate) fn force_refresh(&mut self) {
        self.pull_armed = false;
        self.dispatch(ViewEvent::RefreshReleased);
    }

    fn pull(&mut self) {
        if self.pull_armed {
            self.force_refresh();
        } else {
            self.pull_armed = true;
        }
    }

    fn move_by(&mut self, delta: isize) {
        self.pull_armed = false;
        let count = self.item_count();
        if let Some(index) = scroll::move_selection(self.ui.selected, count, delta) {
            self.select(index);
        }
    }

    fn select(&mut self, index: usize) {
        self.ui.selected = Some(index);
        self.reveal_pending = true;
        self.reveal_selection();
        self.viewport_moved = true;
    }
}
