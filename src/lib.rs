//! Waterfall Feed
//!
//! A paginated multi-column feed with pull-to-refresh. The pieces:
//!
//! - [`controller::DataController`] owns the item collection and admits at
//!   most one fetch (initial, load-more or refresh) at a time
//! - [`coordinator::Coordinator`] turns view events into controller calls
//!   and hands back view props and commands
//! - [`logic::layout`] computes column widths and item placement
//!
//! The `waterfall` binary is a terminal host built on top of these.

pub mod api;
pub mod config;
pub mod controller;
pub mod coordinator;
pub mod logging;
pub mod logic;
pub mod model;
pub mod services;
pub mod utils;

pub use controller::{DataController, FeedSnapshot, FetchTicket};
pub use coordinator::{Coordinator, Dispatch, Settled, ViewCommand, ViewEvent, ViewProps};
pub use logic::errors::FetchError;
pub use logic::layout::{LayoutError, LayoutParams};
pub use model::{FetchKind, FetchOutcome, GuardError, Item, LoadingLabels, LoadingState};
pub use services::{FetchProvider, MockFeed};
