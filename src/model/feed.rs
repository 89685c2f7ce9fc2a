//! Feed Model
//!
//! The item collection plus everything the data controller tracks about it:
//! loading state, the single in-flight slot, page cursor and last failure.
//!
//! Transitions are two-phase. `begin` is the synchronous check-and-set that
//! claims the in-flight slot; `complete` applies a fetch result and frees it.
//! Nothing between the check and the set can yield, so two triggers arriving
//! back to back can never both pass.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, warn};

use super::item::Item;
use super::types::{FetchKind, LoadingState, PageRequest};
use crate::logic::errors::FetchError;

/// Precondition failures when starting or finishing a fetch
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("a {running} fetch is already in flight")]
    Busy { running: FetchKind },

    #[error("initial load already ran")]
    AlreadyInitialized,

    /// A completion arrived for an operation that does not own the slot.
    /// Only a guard bug can produce this.
    #[error("{found} fetch completed while {expected:?} held the in-flight slot")]
    ConcurrencyViolation {
        expected: Option<FetchKind>,
        found: FetchKind,
    },
}

/// What a fetch operation ended up doing
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Page applied (appended for load-more, replaced otherwise)
    Loaded {
        kind: FetchKind,
        received: usize,
        total: usize,
    },
    /// Load-more came back with zero items
    Exhausted,
    /// Provider failed; collection untouched
    Failed { kind: FetchKind, error: FetchError },
    /// Never started (or never applied) because of the guard
    Skipped(GuardError),
}

impl FetchOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, FetchOutcome::Skipped(_))
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Item collection and loading state
#[derive(Clone, Debug, Default)]
pub struct FeedModel {
    items: Arc<Vec<Item>>,
    loading: LoadingState,
    in_flight: Option<FetchKind>,
    initialized: bool,
    pages_loaded: usize,
    generation: u64,
    last_error: Option<FetchError>,
}

impl FeedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current collection; the `Arc` is swapped once per applied page
    pub fn items(&self) -> &Arc<Vec<Item>> {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn loading_state(&self) -> LoadingState {
        self.loading
    }

    pub fn in_flight(&self) -> Option<FetchKind> {
        self.in_flight
    }

    /// Bumped every time the collection changes
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Claim the in-flight slot for `kind`
    ///
    /// Returns the page to request. Fails without touching any state when
    /// another fetch holds the slot, or when the initial load already ran.
    pub fn begin(&mut self, kind: FetchKind) -> Result<PageRequest, GuardError> {
        if let Some(running) = self.in_flight {
            return Err(GuardError::Busy { running });
        }
        if kind == FetchKind::Initial && self.initialized {
            return Err(GuardError::AlreadyInitialized);
        }

        self.in_flight = Some(kind);
        let page = match kind {
            FetchKind::Initial => {
                self.initialized = true;
                0
            }
            FetchKind::LoadMore => {
                self.loading = LoadingState::LoadingMore;
                self.pages_loaded
            }
            FetchKind::Refresh => {
                self.loading = LoadingState::Refreshing;
                0
            }
        };

        debug!(kind = %kind, page, "fetch started");
        Ok(PageRequest { page })
    }

    /// Apply a fetch result and release the in-flight slot
    pub fn complete(
        &mut self,
        kind: FetchKind,
        result: Result<Vec<Item>, FetchError>,
    ) -> FetchOutcome {
        if self.in_flight != Some(kind) {
            let violation = GuardError::ConcurrencyViolation {
                expected: self.in_flight,
                found: kind,
            };
            error!(%violation, "fetch completion does not own the in-flight slot");
            debug_assert!(false, "{}", violation);
            return FetchOutcome::Skipped(violation);
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                self.last_error = None;
                self.apply_page(kind, page)
            }
            Err(error) => {
                warn!(kind = %kind, %error, "fetch failed");
                // Display stays lenient: a failed load-more reads as "no more data"
                self.loading = match kind {
                    FetchKind::LoadMore => LoadingState::Empty,
                    FetchKind::Initial | FetchKind::Refresh => LoadingState::Idle,
                };
                self.last_error = Some(error.clone());
                FetchOutcome::Failed { kind, error }
            }
        }
    }

    /// Release the slot for a fetch that will never complete
    pub fn abandon(&mut self, kind: FetchKind) {
        if self.in_flight != Some(kind) {
            return;
        }
        self.in_flight = None;
        if matches!(
            self.loading,
            LoadingState::LoadingMore | LoadingState::Refreshing
        ) {
            self.loading = LoadingState::Idle;
        }
        warn!(kind = %kind, "fetch abandoned before completion");
    }

    fn apply_page(&mut self, kind: FetchKind, page: Vec<Item>) -> FetchOutcome {
        let received = page.len();

        match kind {
            FetchKind::Initial | FetchKind::Refresh => {
                self.items = Arc::new(page);
                self.pages_loaded = 1;
            }
            FetchKind::LoadMore => {
                if page.is_empty() {
                    self.loading = LoadingState::Empty;
                    debug!("load-more returned no items");
                    return FetchOutcome::Exhausted;
                }
                Arc::make_mut(&mut self.items).extend(page);
                self.pages_loaded += 1;
            }
        }

        self.generation += 1;
        self.loading = LoadingState::Idle;
        debug!(kind = %kind, received, total = self.items.len(), "page applied");

        FetchOutcome::Loaded {
            kind,
            received,
            total: self.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::ThumbnailBean;

    fn page(n: usize, tag: &str) -> Vec<Item> {
        (0..n)
            .map(|i| {
                Item::Thumbnail(ThumbnailBean {
                    title: format!("{}-{}", tag, i),
                    ..Default::default()
                })
            })
            .collect()
    }

    #[test]
    fn test_new_model_is_idle_and_empty() {
        let model = FeedModel::new();
        assert!(model.is_empty());
        assert_eq!(model.loading_state(), LoadingState::Idle);
        assert!(model.in_flight().is_none());
        assert_eq!(model.generation(), 0);
    }

    #[test]
    fn test_begin_claims_slot() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::LoadMore).unwrap();

        assert_eq!(model.in_flight(), Some(FetchKind::LoadMore));
        assert_eq!(model.loading_state(), LoadingState::LoadingMore);
        assert_eq!(
            model.begin(FetchKind::LoadMore),
            Err(GuardError::Busy {
                running: FetchKind::LoadMore
            })
        );
        assert_eq!(
            model.begin(FetchKind::Refresh),
            Err(GuardError::Busy {
                running: FetchKind::LoadMore
            })
        );
        // Rejected begin leaves the loading state alone
        assert_eq!(model.loading_state(), LoadingState::LoadingMore);
    }

    #[test]
    fn test_initial_load_only_once() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::Initial).unwrap();
        model.complete(FetchKind::Initial, Ok(page(3, "a")));

        assert_eq!(
            model.begin(FetchKind::Initial),
            Err(GuardError::AlreadyInitialized)
        );
    }

    #[test]
    fn test_load_more_appends_in_order() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::Initial).unwrap();
        model.complete(FetchKind::Initial, Ok(page(2, "a")));
        let before = model.items().clone();

        model.begin(FetchKind::LoadMore).unwrap();
        let outcome = model.complete(FetchKind::LoadMore, Ok(page(3, "b")));

        assert_eq!(
            outcome,
            FetchOutcome::Loaded {
                kind: FetchKind::LoadMore,
                received: 3,
                total: 5
            }
        );
        assert_eq!(&model.items()[..2], &before[..]);
        assert_eq!(model.items()[2].title(), "b-0");
        assert_eq!(model.loading_state(), LoadingState::Idle);
        // Snapshot taken before the append is unaffected
        assert_eq!(before.len(), 2);
    }

    #[test]
    fn test_refresh_replaces() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::Initial).unwrap();
        model.complete(FetchKind::Initial, Ok(page(4, "a")));

        model.begin(FetchKind::Refresh).unwrap();
        assert_eq!(model.loading_state(), LoadingState::Refreshing);
        model.complete(FetchKind::Refresh, Ok(page(2, "r")));

        assert_eq!(model.len(), 2);
        assert_eq!(model.items()[0].title(), "r-0");
        assert_eq!(model.loading_state(), LoadingState::Idle);
    }

    #[test]
    fn test_empty_page_marks_empty() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::Initial).unwrap();
        model.complete(FetchKind::Initial, Ok(page(2, "a")));
        let generation = model.generation();

        model.begin(FetchKind::LoadMore).unwrap();
        let outcome = model.complete(FetchKind::LoadMore, Ok(Vec::new()));

        assert_eq!(outcome, FetchOutcome::Exhausted);
        assert_eq!(model.loading_state(), LoadingState::Empty);
        assert_eq!(model.len(), 2);
        assert_eq!(model.generation(), generation);
        assert!(model.last_error().is_none());
    }

    #[test]
    fn test_failure_releases_slot_and_records_error() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::LoadMore).unwrap();
        let outcome = model.complete(
            FetchKind::LoadMore,
            Err(FetchError::Provider("boom".into())),
        );

        assert!(matches!(outcome, FetchOutcome::Failed { .. }));
        assert!(model.in_flight().is_none());
        assert_eq!(model.loading_state(), LoadingState::Empty);
        assert_eq!(model.last_error(), Some(&FetchError::Provider("boom".into())));

        model.begin(FetchKind::LoadMore).unwrap();
        model.complete(FetchKind::LoadMore, Ok(page(1, "c")));
        assert!(model.last_error().is_none());
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_failed_refresh_keeps_items() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::Initial).unwrap();
        model.complete(FetchKind::Initial, Ok(page(3, "a")));

        model.begin(FetchKind::Refresh).unwrap();
        model.complete(
            FetchKind::Refresh,
            Err(FetchError::Status { code: 502 }),
        );

        assert_eq!(model.len(), 3);
        assert_eq!(model.loading_state(), LoadingState::Idle);
    }

    #[test]
    fn test_page_cursor() {
        let mut model = FeedModel::new();
        assert_eq!(model.begin(FetchKind::Initial).unwrap().page, 0);
        model.complete(FetchKind::Initial, Ok(page(1, "a")));

        assert_eq!(model.begin(FetchKind::LoadMore).unwrap().page, 1);
        model.complete(FetchKind::LoadMore, Ok(page(1, "b")));
        assert_eq!(model.begin(FetchKind::LoadMore).unwrap().page, 2);
        model.complete(FetchKind::LoadMore, Ok(Vec::new()));
        // Empty page does not advance the cursor
        assert_eq!(model.begin(FetchKind::LoadMore).unwrap().page, 2);
        model.complete(FetchKind::LoadMore, Ok(Vec::new()));

        assert_eq!(model.begin(FetchKind::Refresh).unwrap().page, 0);
        model.complete(FetchKind::Refresh, Ok(page(1, "r")));
        assert_eq!(model.begin(FetchKind::LoadMore).unwrap().page, 1);
    }

    #[test]
    fn test_abandon_clears_slot() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::Refresh).unwrap();
        model.abandon(FetchKind::Refresh);

        assert!(model.in_flight().is_none());
        assert_eq!(model.loading_state(), LoadingState::Idle);
        assert!(model.begin(FetchKind::LoadMore).is_ok());
    }

    #[test]
    fn test_abandon_ignores_other_kind() {
        let mut model = FeedModel::new();
        model.begin(FetchKind::LoadMore).unwrap();
        model.abandon(FetchKind::Refresh);
        assert_eq!(model.in_flight(), Some(FetchKind::LoadMore));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "held the in-flight slot")]
    fn test_completion_without_slot_is_a_guard_bug() {
        let mut model = FeedModel::new();
        model.complete(FetchKind::LoadMore, Ok(page(1, "x")));
    }
}
