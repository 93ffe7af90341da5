pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{PageRequest, PageResponse};

/// Source of feed pages.
///
/// Any HTTP status is reported through [`PageResponse`]; `Err` is reserved
/// for transport and decoding failures.
#[async_trait]
pub trait PageFetcher {
    async fn fetch(&self, request: PageRequest, auth_token: &str) -> Result<PageResponse>;
}
