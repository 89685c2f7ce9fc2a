//! Feed orchestration methods
//!
//! The glue between terminal input and the coordinator:
//! - Forwarding view events and applying the commands they produce
//! - Applying fetch completions
//! - Asking for the next page when the viewport nears the end

use tracing::{debug, warn};

use crate::App;
use waterfall::{Dispatch, Settled, ViewCommand, ViewEvent};

impl App {
    /// Send a view event to the coordinator and carry out what comes back
    pub(crate) fn dispatch(&mut self, event: ViewEvent) {
        match self.coordinator.handle(event) {
            Dispatch::Started(kind) => debug!(kind = %kind, "fetch started"),
            Dispatch::Skipped { reason, command } => {
                debug!(%reason, ?event, "event skipped");
                if let Some(command) = command {
                    self.apply_command(command);
                }
            }
            Dispatch::Command(command) => self.apply_command(command),
            Dispatch::Ignored => {}
        }
    }

    pub(crate) fn handle_settled(&mut self, settled: Settled) {
        if let Some(error) = settled.outcome.error() {
            warn!(
                kind = %settled.kind,
                %error,
                transient = error.is_transient(),
                "fetch failed"
            );
        }
        if let Some(command) = self.coordinator.on_settled(settled) {
            self.apply_command(command);
        }

        let count = self.coordinator.controller().item_count();
        self.ui.clamp_selection(count);
    }

    pub(crate) fn apply_command(&mut self, command: ViewCommand) {
        match command {
            ViewCommand::CollapseRefreshIndicator => {
                self.pull_armed = false;
            }
            ViewCommand::ScrollToIndex { index, .. } => {
                // Terminal scrolling is never animated
                self.ui.selected = Some(index);
                self.reveal_pending = true;
            }
        }
    }

    /// Scroll the pending selection into view using the last laid-out grid
    pub(crate) fn reveal_selection(&mut self) {
        if !self.reveal_pending {
            return;
        }
        let Some(card) = self.ui.selected.and_then(|idx| self.grid.card(idx)) else {
            return;
        };
        self.ui.reveal(card.y, card.height);
        self.reveal_pending = false;
        self.viewport_moved = true;
    }

    /// Fire `EndReached` when the viewport bottom is near the content end
    ///
    /// Only re-checks after the viewport moved or the collection changed, so
    /// an exhausted feed is not polled on every frame.
    pub(crate) fn request_more_if_near_end(&mut self) {
        let generation = self.coordinator.controller().snapshot().generation;
        let changed = generation != self.checked_generation;
        if !self.viewport_moved && !changed {
            return;
        }
        self.viewport_moved = false;
        self.checked_generation = generation;

        if self.ui.is_near_end(self.end_reached_threshold) {
            self.dispatch(ViewEvent::EndReached);
        }
    }
}
