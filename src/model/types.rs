//! Shared types for the Model
//!
//! These types are used across the feed model, the coordinator and the view.

use serde::Deserialize;

/// Which data-mutating operation a fetch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Initial,
    LoadMore,
    Refresh,
}

impl FetchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchKind::Initial => "initial",
            FetchKind::LoadMore => "load-more",
            FetchKind::Refresh => "refresh",
        }
    }
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loading indicator state, owned by the data controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Refreshing,
    LoadingMore,
    /// Last load-more came back with nothing
    Empty,
}

impl LoadingState {
    /// Display text for this state
    pub fn label<'a>(&self, labels: &'a LoadingLabels) -> &'a str {
        match self {
            LoadingState::Idle => &labels.idle,
            LoadingState::Refreshing => &labels.refreshing,
            LoadingState::LoadingMore => &labels.loading_more,
            LoadingState::Empty => &labels.empty,
        }
    }
}

/// Text shown for each loading state and the pull header
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoadingLabels {
    pub idle: String,
    pub loading_more: String,
    pub empty: String,
    pub refreshing: String,
    pub pulling: String,
}

impl Default for LoadingLabels {
    fn default() -> Self {
        Self {
            idle: "Loading...".to_string(),
            loading_more: "Loading more...".to_string(),
            empty: "No more data".to_string(),
            refreshing: "Refreshing...".to_string(),
            pulling: "Keep pulling to refresh".to_string(),
        }
    }
}

/// Page cursor handed to the fetch provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    pub page: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(LoadingState::default(), LoadingState::Idle);
    }

    #[test]
    fn test_labels() {
        let labels = LoadingLabels::default();
        assert_eq!(LoadingState::Idle.label(&labels), "Loading...");
        assert_eq!(LoadingState::LoadingMore.label(&labels), "Loading more...");
        assert_eq!(LoadingState::Empty.label(&labels), "No more data");
        assert_eq!(LoadingState::Refreshing.label(&labels), "Refreshing...");
    }

    #[test]
    fn test_partial_labels_fill_defaults() {
        let labels: LoadingLabels = serde_yaml::from_str("empty: \"That's all\"").unwrap();
        assert_eq!(labels.empty, "That's all");
        assert_eq!(labels.idle, "Loading...");
    }
}
