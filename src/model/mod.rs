//! Application Model
//!
//! Plain data for the feed and the terminal view:
//!
//! - **item**: Feed entries and their wire form
//! - **types**: Fetch kinds, loading states, footer labels, page cursor
//! - **feed**: The collection plus single-flight bookkeeping
//! - **ui**: Selection and scroll state of the terminal host
//!
//! Nothing in here performs I/O. The data controller owns a [`FeedModel`]
//! behind a lock and drives it from async fetches.

pub mod feed;
pub mod item;
pub mod types;
pub mod ui;

pub use feed::{FeedModel, FetchOutcome, GuardError};
pub use item::{item_key, Item, ItemType};
pub use types::*;
pub use ui::UiModel;
