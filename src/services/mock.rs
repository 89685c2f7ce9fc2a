//! In-process feed with simulated network latency
//!
//! Serves the same page on every call (the demo set doubled), optionally runs
//! dry after a number of pages, and can be told to fail the next N calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::provider::FetchProvider;
use crate::logic::errors::FetchError;
use crate::model::item::{LargePictureBean, PictureGridBean, ThumbnailBean};
use crate::model::{Item, PageRequest};

/// Default simulated round trip
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(600);

pub struct MockFeed {
    page: Vec<Item>,
    latency: Duration,
    max_pages: Option<usize>,
    failures_pending: AtomicUsize,
    calls: AtomicUsize,
}

impl MockFeed {
    pub fn new(page: Vec<Item>, latency: Duration) -> Self {
        Self {
            page,
            latency,
            max_pages: None,
            failures_pending: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }

    /// Demo page: sample cards of every style except the large picture one,
    /// repeated twice
    pub fn demo(latency: Duration) -> Self {
        let sample: Vec<Item> = demo_items()
            .into_iter()
            .filter(|item| !matches!(item, Item::LargePicture(_)))
            .collect();
        let page = sample.iter().chain(sample.iter()).cloned().collect();
        Self::new(page, latency)
    }

    /// Pages at or beyond `max_pages` come back empty
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = Some(max_pages);
        self
    }

    /// Make the next `count` calls fail
    pub fn fail_next(&self, count: usize) {
        self.failures_pending.store(count, Ordering::SeqCst);
    }

    /// How many times `fetch_page` has been entered
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn page_len(&self) -> usize {
        self.page.len()
    }

    fn take_failure(&self) -> bool {
        self.failures_pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

#[async_trait]
impl FetchProvider for MockFeed {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Item>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(call, page = request.page, "mock fetch");

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.take_failure() {
            return Err(FetchError::Provider(format!(
                "simulated failure on call {}",
                call
            )));
        }

        if matches!(self.max_pages, Some(max) if request.page >= max) {
            return Ok(Vec::new());
        }

        Ok(self.page.clone())
    }
}

/// One card of each supported style
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::PictureGrid(PictureGridBean {
            title: "Autumn colours arrive early in the northern hills".to_string(),
            pic_list: vec![
                "hills-1.jpg".to_string(),
                "hills-2.jpg".to_string(),
                "hills-3.jpg".to_string(),
            ],
            sub_info: vec!["Travel".to_string(), "2.1k reads".to_string()],
        }),
        Item::LargePicture(LargePictureBean {
            title: "Night market food guide".to_string(),
            pic_url: "market.jpg".to_string(),
            sub_info: vec!["Food".to_string()],
        }),
        Item::Thumbnail(ThumbnailBean {
            title: "Five small habits that make long commutes easier".to_string(),
            pic_url: "commute.jpg".to_string(),
            sub_info: vec!["Lifestyle".to_string(), "312 comments".to_string()],
        }),
        Item::Thumbnail(ThumbnailBean {
            title: "Local team clinches the title in extra time".to_string(),
            pic_url: "match.jpg".to_string(),
            sub_info: vec!["Sports".to_string()],
        }),
        Item::PictureGrid(PictureGridBean {
            title: "A weekend of kites on the riverbank".to_string(),
            pic_list: vec!["kite-1.jpg".to_string(), "kite-2.jpg".to_string()],
            sub_info: vec!["Photo".to_string()],
        }),
    ]
}
