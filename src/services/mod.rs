//! Feed Sources
//!
//! Anything that can produce pages of items:
//! - provider: The async trait the data controller fetches through
//! - mock: In-memory source with simulated latency and failures
//!
//! The HTTP source lives in `crate::api`.

pub mod mock;
pub mod provider;

pub use mock::MockFeed;
pub use provider::FetchProvider;
