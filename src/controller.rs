//! Data Controller
//!
//! Owns the feed model and the fetch provider. Every data-mutating operation
//! (initial load, load-more, refresh) goes through the same two steps:
//!
//! 1. `try_begin` claims the single in-flight slot under one lock acquisition
//!    and hands back a [`FetchTicket`].
//! 2. `run` awaits the provider and settles the ticket, which applies the page
//!    and frees the slot.
//!
//! A ticket that is dropped without being settled (its future was cancelled)
//! frees the slot in `Drop`, so the guard can never stay stuck.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::logic::errors::FetchError;
use crate::model::{
    FeedModel, FetchKind, FetchOutcome, GuardError, Item, ItemType, LoadingState, PageRequest,
};
use crate::services::FetchProvider;

/// Point-in-time view of the feed for the host view
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub items: Arc<Vec<Item>>,
    pub loading: LoadingState,
    pub in_flight: Option<FetchKind>,
    pub generation: u64,
    pub last_error: Option<FetchError>,
}

/// Proof of owning the in-flight slot
#[derive(Debug)]
pub struct FetchTicket {
    kind: FetchKind,
    request: PageRequest,
    feed: Arc<Mutex<FeedModel>>,
    settled: bool,
}

impl FetchTicket {
    pub fn kind(&self) -> FetchKind {
        self.kind
    }

    pub fn request(&self) -> PageRequest {
        self.request
    }

    fn settle(mut self, result: Result<Vec<Item>, FetchError>) -> FetchOutcome {
        self.settled = true;
        self.feed.lock().complete(self.kind, result)
    }
}

impl Drop for FetchTicket {
    fn drop(&mut self) {
        if !self.settled {
            self.feed.lock().abandon(self.kind);
        }
    }
}

pub struct DataController {
    provider: Arc<dyn FetchProvider>,
    feed: Arc<Mutex<FeedModel>>,
}

impl DataController {
    pub fn new(provider: Arc<dyn FetchProvider>) -> Self {
        Self {
            provider,
            feed: Arc::new(Mutex::new(FeedModel::new())),
        }
    }

    /// Claim the in-flight slot for `kind` without suspending
    pub fn try_begin(&self, kind: FetchKind) -> Result<FetchTicket, GuardError> {
        let request = self.feed.lock().begin(kind)?;
        Ok(FetchTicket {
            kind,
            request,
            feed: Arc::clone(&self.feed),
            settled: false,
        })
    }

    /// Await the provider for a claimed ticket and apply the result
    pub async fn run(&self, ticket: FetchTicket) -> FetchOutcome {
        let kind = ticket.kind();
        let result = self.provider.fetch_page(ticket.request()).await;
        let outcome = ticket.settle(result);

        match &outcome {
            FetchOutcome::Loaded {
                received, total, ..
            } => info!(kind = %kind, received, total, "fetch settled"),
            FetchOutcome::Exhausted => info!(kind = %kind, "feed exhausted"),
            // Failures and guard bugs are already logged by the model
            FetchOutcome::Failed { .. } | FetchOutcome::Skipped(_) => {}
        }
        outcome
    }

    /// Fetch the first page; call once when the view mounts
    pub async fn initial_load(&self) -> FetchOutcome {
        self.start(FetchKind::Initial).await
    }

    /// Append the next page; a no-op while any fetch is in flight
    pub async fn load_more(&self) -> FetchOutcome {
        self.start(FetchKind::LoadMore).await
    }

    /// Replace the collection with a fresh first page; a no-op while any
    /// fetch is in flight
    pub async fn refresh(&self) -> FetchOutcome {
        self.start(FetchKind::Refresh).await
    }

    async fn start(&self, kind: FetchKind) -> FetchOutcome {
        match self.try_begin(kind) {
            Ok(ticket) => self.run(ticket).await,
            Err(reason) => {
                debug!(kind = %kind, %reason, "fetch skipped");
                FetchOutcome::Skipped(reason)
            }
        }
    }

    pub fn snapshot(&self) -> FeedSnapshot {
        let feed = self.feed.lock();
        FeedSnapshot {
            items: Arc::clone(feed.items()),
            loading: feed.loading_state(),
            in_flight: feed.in_flight(),
            generation: feed.generation(),
            last_error: feed.last_error().cloned(),
        }
    }

    /// Current collection handle
    pub fn items(&self) -> Arc<Vec<Item>> {
        Arc::clone(self.feed.lock().items())
    }

    pub fn item_count(&self) -> usize {
        self.feed.lock().len()
    }

    pub fn item_at(&self, index: usize) -> Option<Item> {
        self.feed.lock().items().get(index).cloned()
    }

    pub fn item_type(&self, index: usize) -> Option<ItemType> {
        self.feed.lock().items().get(index).map(Item::item_type)
    }

    pub fn loading_state(&self) -> LoadingState {
        self.feed.lock().loading_state()
    }

    pub fn in_flight(&self) -> Option<FetchKind> {
        self.feed.lock().in_flight()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight().is_some()
    }

    pub fn last_error(&self) -> Option<FetchError> {
        self.feed.lock().last_error().cloned()
    }
}
