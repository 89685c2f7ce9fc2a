//! Interaction Coordinator
//!
//! Turns view-originated events into data controller calls and reflects the
//! controller's state back as view props. Fetches run on spawned tasks; their
//! completion comes back as a [`Settled`] value on the channel returned by
//! [`Coordinator::new`], and [`Coordinator::on_settled`] converts it into the
//! view commands the host has to carry out.
//!
//! The coordinator only reads loading state. All transitions belong to the
//! data controller.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::controller::DataController;
use crate::logic::layout::{self, ItemStyle, LayoutParams};
use crate::model::{item_key, FetchKind, FetchOutcome, GuardError, ItemType, LoadingLabels};

/// Events the host view reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// View is on screen; load the first page
    Mounted,
    /// Viewport is close to the end of rendered content
    EndReached,
    /// Pull gesture crossed the threshold and was released
    RefreshReleased,
    ItemTap(usize),
    Resized { width: f32 },
}

/// Side effects the host view has to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// Close the pull-to-refresh indicator. Skipping this leaves it stuck open.
    CollapseRefreshIndicator,
    ScrollToIndex { index: usize, animated: bool },
}

/// What handling one event did
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// A fetch was started on a background task
    Started(FetchKind),
    /// The single-flight guard turned the trigger away
    Skipped {
        reason: GuardError,
        command: Option<ViewCommand>,
    },
    Command(ViewCommand),
    Ignored,
}

/// Completion of a spawned fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Settled {
    pub kind: FetchKind,
    pub outcome: FetchOutcome,
}

/// Everything the host view reads to draw the list chrome
#[derive(Debug, Clone, PartialEq)]
pub struct ViewProps {
    pub item_count: usize,
    pub footer_visible: bool,
    pub footer_text: String,
    pub header_text: String,
    pub banner_visible: bool,
    pub refresh_indicator_open: bool,
}

/// Geometry and recycling tag for one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    pub item_type: ItemType,
    pub style: ItemStyle,
}

pub struct Coordinator {
    controller: Arc<DataController>,
    settled_tx: mpsc::UnboundedSender<Settled>,
    layout: LayoutParams,
    labels: LoadingLabels,
    viewport_width: f32,
    refresh_indicator_open: bool,
}

impl Coordinator {
    pub fn new(
        controller: Arc<DataController>,
        layout: LayoutParams,
        labels: LoadingLabels,
        viewport_width: f32,
    ) -> (Self, mpsc::UnboundedReceiver<Settled>) {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let coordinator = Self {
            controller,
            settled_tx,
            layout,
            labels,
            viewport_width,
            refresh_indicator_open: false,
        };
        (coordinator, settled_rx)
    }

    pub fn controller(&self) -> &Arc<DataController> {
        &self.controller
    }

    pub fn layout(&self) -> &LayoutParams {
        &self.layout
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn refresh_indicator_open(&self) -> bool {
        self.refresh_indicator_open
    }

    /// Handle one view event. Must be called from within a tokio runtime.
    pub fn handle(&mut self, event: ViewEvent) -> Dispatch {
        match event {
            ViewEvent::Mounted => self.dispatch_fetch(FetchKind::Initial),
            ViewEvent::EndReached => self.dispatch_fetch(FetchKind::LoadMore),
            ViewEvent::RefreshReleased => {
                self.refresh_indicator_open = true;
                match self.dispatch_fetch(FetchKind::Refresh) {
                    // The running refresh closes the indicator when it settles
                    Dispatch::Skipped {
                        reason:
                            reason @ GuardError::Busy {
                                running: FetchKind::Refresh,
                            },
                        ..
                    } => Dispatch::Skipped {
                        reason,
                        command: None,
                    },
                    Dispatch::Skipped { reason, .. } => {
                        // Nothing will settle for this gesture, so close now
                        self.refresh_indicator_open = false;
                        Dispatch::Skipped {
                            reason,
                            command: Some(ViewCommand::CollapseRefreshIndicator),
                        }
                    }
                    other => other,
                }
            }
            ViewEvent::ItemTap(index) => {
                if index >= self.controller.item_count() {
                    debug!(index, "tap outside the collection");
                    return Dispatch::Ignored;
                }
                info!(index, key = %item_key(index), "item tapped");
                Dispatch::Command(ViewCommand::ScrollToIndex {
                    index,
                    animated: true,
                })
            }
            ViewEvent::Resized { width } => {
                self.viewport_width = width;
                Dispatch::Ignored
            }
        }
    }

    /// Turn a fetch completion into view commands
    pub fn on_settled(&mut self, settled: Settled) -> Option<ViewCommand> {
        debug!(kind = %settled.kind, outcome = ?settled.outcome, "fetch settled");

        match settled.kind {
            FetchKind::Refresh => {
                self.refresh_indicator_open = false;
                Some(ViewCommand::CollapseRefreshIndicator)
            }
            FetchKind::Initial | FetchKind::LoadMore => None,
        }
    }

    pub fn props(&self) -> ViewProps {
        let snapshot = self.controller.snapshot();
        let item_count = snapshot.items.len();
        let header_text = if self.refresh_indicator_open {
            self.labels.refreshing.clone()
        } else {
            self.labels.pulling.clone()
        };

        ViewProps {
            item_count,
            footer_visible: item_count > 0,
            footer_text: snapshot.loading.label(&self.labels).to_string(),
            header_text,
            banner_visible: item_count > 0,
            refresh_indicator_open: self.refresh_indicator_open,
        }
    }

    /// Geometry for the item at `index` under the current viewport width
    pub fn item_layout(&self, index: usize) -> Option<ItemLayout> {
        let item_type = self.controller.item_type(index)?;
        Some(ItemLayout {
            item_type,
            style: layout::item_style(&self.layout, self.viewport_width),
        })
    }

    fn dispatch_fetch(&self, kind: FetchKind) -> Dispatch {
        let ticket = match self.controller.try_begin(kind) {
            Ok(ticket) => ticket,
            Err(reason) => {
                debug!(kind = %kind, %reason, "trigger ignored");
                return Dispatch::Skipped {
                    reason,
                    command: None,
                };
            }
        };

        let controller = Arc::clone(&self.controller);
        let settled_tx = self.settled_tx.clone();
        tokio::spawn(async move {
            let outcome = controller.run(ticket).await;
            // Receiver gone means the view is being torn down
            let _ = settled_tx.send(Settled { kind, outcome });
        });

        Dispatch::Started(kind)
    }
}
