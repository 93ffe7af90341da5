use std::sync::Arc;

use crate::app::error::{PracticeFeedError, Result};
use crate::config::Config;
use crate::connectivity::{ConnectivityProbe, TcpProbe};
use crate::controller::FeedController;
use crate::fetcher::http_fetcher::HttpPageFetcher;
use crate::fetcher::PageFetcher;

pub struct AppContext {
    pub config: Config,
    pub fetcher: Arc<dyn PageFetcher + Send + Sync>,
    pub probe: Arc<dyn ConnectivityProbe + Send + Sync>,
    auth_token: String,
}

impl AppContext {
    pub fn new(config: Config, auth_token: Option<String>) -> Result<Self> {
        let auth_token = auth_token
            .filter(|t| !t.trim().is_empty())
            .ok_or(PracticeFeedError::MissingToken)?;

        let fetcher: Arc<dyn PageFetcher + Send + Sync> = Arc::new(HttpPageFetcher::new(
            &config.api.base_url,
            config.api.request_timeout(),
        )?);

        let probe_timeout = config.connectivity.probe_timeout();
        let probe = match &config.connectivity.probe_addr {
            Some(addr) => TcpProbe::new(addr.clone(), probe_timeout),
            None => TcpProbe::for_url(&config.api.base_url, probe_timeout)?,
        };
        let probe: Arc<dyn ConnectivityProbe + Send + Sync> = Arc::new(probe);

        Ok(Self::with_parts(config, fetcher, probe, auth_token))
    }

    pub fn with_parts(
        config: Config,
        fetcher: Arc<dyn PageFetcher + Send + Sync>,
        probe: Arc<dyn ConnectivityProbe + Send + Sync>,
        auth_token: String,
    ) -> Self {
        Self {
            config,
            fetcher,
            probe,
            auth_token,
        }
    }

    /// A fresh controller for one visit of the feed screen.
    pub fn feed_controller(&self) -> FeedController {
        FeedController::with_options(
            self.fetcher.clone(),
            self.probe.clone(),
            self.auth_token.clone(),
            self.config.feed.options(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_rejected() {
        let result = AppContext::new(Config::default(), None);
        assert!(matches!(result, Err(PracticeFeedError::MissingToken)));

        let result = AppContext::new(Config::default(), Some("  ".into()));
        assert!(matches!(result, Err(PracticeFeedError::MissingToken)));
    }

    #[test]
    fn test_controllers_are_independent() {
        let ctx = AppContext::new(Config::default(), Some("secret".into())).unwrap();

        let first = ctx.feed_controller();
        let second = ctx.feed_controller();
        first.dismiss_error();

        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(first.options().page_size, 10);
    }

    #[test]
    fn test_invalid_base_url_fails() {
        let mut config = Config::default();
        config.api.base_url = "nope".into();
        assert!(AppContext::new(config, Some("secret".into())).is_err());
    }
}
