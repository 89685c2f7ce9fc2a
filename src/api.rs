use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::logic::errors::FetchError;
use crate::model::{Item, PageRequest};
use crate::services::FetchProvider;

/// Feed endpoints answer with either a bare array or an envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PageResponse {
    Items(Vec<Item>),
    Envelope { items: Vec<Item> },
}

impl PageResponse {
    fn into_items(self) -> Vec<Item> {
        match self {
            PageResponse::Items(items) | PageResponse::Envelope { items } => items,
        }
    }
}

/// HTTP feed source: `GET <url>?page=N`
#[derive(Clone)]
pub struct FeedClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl FeedClient {
    pub fn new(url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Provider(e.to_string()))?;

        Ok(Self {
            client,
            url,
            timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FetchProvider for FeedClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Item>, FetchError> {
        debug!(url = %self.url, page = request.page, "http fetch");

        let response = self
            .client
            .get(&self.url)
            .query(&[("page", request.page)])
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                code: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, self.timeout))?;

        parse_page(&text)
    }
}

/// Decode a page body
pub fn parse_page(body: &str) -> Result<Vec<Item>, FetchError> {
    serde_json::from_str::<PageResponse>(body)
        .map(PageResponse::into_items)
        .map_err(|e| FetchError::Decode(e.to_string()))
}
