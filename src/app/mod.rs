//! App Orchestration Methods
//!
//! `impl App` blocks grouped by concern:
//! - feed: Forwarding view events to the coordinator and applying the
//!   commands and completions that come back
//! - navigation: Moving the selection and the viewport

pub(crate) mod feed;
pub(crate) mod navigation;
