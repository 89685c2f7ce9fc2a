use async_trait::async_trait;

use crate::logic::errors::FetchError;
use crate::model::{Item, PageRequest};

/// Asynchronous source of feed pages
///
/// Implementations must have bounded latency: the data controller has no
/// timeout of its own, so a fetch that never resolves blocks every later
/// load-more and refresh.
#[async_trait]
pub trait FetchProvider: Send + Sync {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Item>, FetchError>;
}
