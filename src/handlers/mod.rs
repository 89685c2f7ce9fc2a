//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Fetch completions are not handled here; they arrive on the coordinator's
//! settled channel and are applied in `app::feed`.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
