//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or runtime:
//! - card: Card height and text fitting for the terminal grid
//! - errors: Fetch error classification
//! - layout: Column geometry and waterfall placement
//! - scroll: End-reached detection and scroll-into-view math

pub mod card;
pub mod errors;
pub mod layout;
pub mod scroll;
