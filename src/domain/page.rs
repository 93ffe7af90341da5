use serde::{Deserialize, Serialize};

use super::FeedItem;

pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Query parameters of one page request. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn first(size: u32) -> Self {
        Self::new(1, size)
    }
}

/// Body of a `/practicelog` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    #[serde(default)]
    pub results: Vec<FeedItem>,
    #[serde(default)]
    pub total_pages: u32,
}

impl PageData {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// What a fetcher got back: the HTTP status and the payload, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse {
    pub status: u16,
    pub data: Option<PageData>,
}

impl PageResponse {
    pub fn new(status: u16, data: Option<PageData>) -> Self {
        Self { status, data }
    }

    pub fn ok(data: PageData) -> Self {
        Self::new(200, Some(data))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
