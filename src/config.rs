use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::api::FeedClient;
use crate::logic::errors::FetchError;
use crate::logic::layout::{ContentInset, LayoutError, LayoutParams};
use crate::model::LoadingLabels;
use crate::services::{FetchProvider, MockFeed};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub source: SourceConfig,
    pub labels: LoadingLabels,
    /// Rows from the content bottom at which the next page is requested
    pub end_reached_threshold: u16,
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            source: SourceConfig::default(),
            labels: LoadingLabels::default(),
            end_reached_threshold: 4,
            vim_mode: false,
        }
    }
}

/// Layout section, in terminal cells
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub columns: usize,
    pub column_spacing: f32,
    pub inter_item_spacing: f32,
    pub content_inset: ContentInset,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            columns: 2,
            column_spacing: 2.0,
            inter_item_spacing: 1.0,
            content_inset: ContentInset {
                top: 0.0,
                left: 1.0,
                bottom: 0.0,
                right: 1.0,
            },
        }
    }
}

impl LayoutConfig {
    pub fn to_params(&self) -> Result<LayoutParams, LayoutError> {
        LayoutParams::new(
            self.columns,
            self.column_spacing,
            self.inter_item_spacing,
            self.content_inset,
        )
    }
}

/// Where pages come from
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    Mock {
        #[serde(default = "default_latency_ms")]
        latency_ms: u64,
        #[serde(default)]
        max_pages: Option<usize>,
    },
    Http {
        url: String,
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
    },
}

fn default_latency_ms() -> u64 {
    600
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig::Mock {
            latency_ms: default_latency_ms(),
            max_pages: Some(5),
        }
    }
}

impl SourceConfig {
    pub fn build_provider(&self) -> Result<Arc<dyn FetchProvider>, FetchError> {
        match self {
            SourceConfig::Mock {
                latency_ms,
                max_pages,
            } => {
                let mut feed = MockFeed::demo(Duration::from_millis(*latency_ms));
                if let Some(max) = max_pages {
                    feed = feed.with_max_pages(*max);
                }
                Ok(Arc::new(feed))
            }
            SourceConfig::Http { url, timeout_ms } => {
                let client = FeedClient::new(url.clone(), Duration::from_millis(*timeout_ms))?;
                Ok(Arc::new(client))
            }
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("Invalid config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&text)
    }
}

/// Locate the config file
///
/// An explicit path must exist. Otherwise `<config_dir>/waterfall/config.yaml`
/// and then `./config.yaml` are tried; `None` means run on defaults.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("waterfall").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
