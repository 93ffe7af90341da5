use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::domain::{PageData, PageRequest, PageResponse};
use crate::fetcher::PageFetcher;

pub const PRACTICE_LOG_PATH: &str = "practicelog";

pub struct HttpPageFetcher {
    client: Client,
    endpoint: Url,
}

impl HttpPageFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("practice-feed/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: Self::endpoint_for(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `{base_url}/practicelog`, keeping any path prefix of the base URL.
    fn endpoint_for(base_url: &str) -> Result<Url> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join(PRACTICE_LOG_PATH)?)
    }

    fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &request.page.to_string())
            .append_pair("size", &request.size.to_string());
        url
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, request: PageRequest, auth_token: &str) -> Result<PageResponse> {
        let url = self.page_url(request);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .bearer_auth(auth_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Page {} rejected with status {}", request.page, status);
            return Ok(PageResponse::new(status.as_u16(), None));
        }

        let body = response.text().await?;
        let data = parse_page_body(&body)?;

        Ok(PageResponse::new(status.as_u16(), data))
    }
}

/// An empty or `null` body is an absent payload rather than an error.
fn parse_page_body(body: &str) -> Result<Option<PageData>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<PageData>>(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher(base: &str) -> HttpPageFetcher {
        HttpPageFetcher::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_endpoint_from_bare_host() {
        let f = fetcher("http://localhost:8080");
        assert_eq!(f.endpoint().as_str(), "http://localhost:8080/practicelog");
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let f = fetcher("https://api.example.com/v1");
        assert_eq!(f.endpoint().as_str(), "https://api.example.com/v1/practicelog");

        let f = fetcher("https://api.example.com/v1/");
        assert_eq!(f.endpoint().as_str(), "https://api.example.com/v1/practicelog");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(HttpPageFetcher::new("not a url", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_page_url_query() {
        let f = fetcher("http://localhost:8080");
        let url = f.page_url(PageRequest::new(3, 10));
        assert_eq!(url.as_str(), "http://localhost:8080/practicelog?page=3&size=10");
    }

    #[test]
    fn test_parse_empty_and_null_bodies() {
        assert_eq!(parse_page_body("").unwrap(), None);
        assert_eq!(parse_page_body("  \n").unwrap(), None);
        assert_eq!(parse_page_body("null").unwrap(), None);
    }

    #[test]
    fn test_parse_page_body() {
        let data = parse_page_body(r#"{"results": [], "totalPages": 4}"#)
            .unwrap()
            .unwrap();
        assert!(data.is_empty());
        assert_eq!(data.total_pages, 4);
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(parse_page_body("{").is_err());
    }
}
