//! Paginated feed state machine.
//!
//! A [`FeedController`] owns the [`FeedState`] of one feed screen and moves it
//! forward through `load_first_page`, `load_next_page` and `dismiss_error`.
//! None of the operations return errors: every outcome, including connectivity
//! loss and failed requests, ends up in the state.
//!
//! # In-flight requests
//!
//! The controller keeps at most one request token. `load_next_page` only
//! starts when no token is held; `load_first_page` always issues a fresh token,
//! superseding whatever was in flight. A response is applied only while its
//! token is still the current one, so a superseded response is dropped.

pub mod policy;

pub use policy::{FailureAction, FailurePolicy, MergeStrategy};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::app::PracticeFeedError;
use crate::connectivity::ConnectivityProbe;
use crate::domain::{FeedFailure, FeedState, PageData, PageRequest, DEFAULT_PAGE_SIZE};
use crate::fetcher::PageFetcher;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOptions {
    pub page_size: u32,
    pub failure_policy: FailurePolicy,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            failure_policy: FailurePolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RequestToken(u64);

struct Inner {
    state: FeedState,
    in_flight: Option<RequestToken>,
    issued: u64,
}

impl Inner {
    /// Claim the request slot and mark the feed as loading.
    fn issue(&mut self) -> RequestToken {
        self.issued += 1;
        let token = RequestToken(self.issued);
        self.in_flight = Some(token);
        self.state.is_loading = true;
        self.state.error = None;
        token
    }
}

enum Outcome {
    Offline,
    Loaded(PageData),
    Empty,
    Rejected(u16),
    Failed(PracticeFeedError),
}

pub struct FeedController {
    fetcher: Arc<dyn PageFetcher + Send + Sync>,
    probe: Arc<dyn ConnectivityProbe + Send + Sync>,
    auth_token: String,
    options: FeedOptions,
    inner: Mutex<Inner>,
}

impl FeedController {
    pub fn new(
        fetcher: Arc<dyn PageFetcher + Send + Sync>,
        probe: Arc<dyn ConnectivityProbe + Send + Sync>,
        auth_token: impl Into<String>,
    ) -> Self {
        Self::with_options(fetcher, probe, auth_token, FeedOptions::default())
    }

    pub fn with_options(
        fetcher: Arc<dyn PageFetcher + Send + Sync>,
        probe: Arc<dyn ConnectivityProbe + Send + Sync>,
        auth_token: impl Into<String>,
        options: FeedOptions,
    ) -> Self {
        Self {
            fetcher,
            probe,
            auth_token: auth_token.into(),
            options,
            inner: Mutex::new(Inner {
                state: FeedState::new(),
                in_flight: None,
                issued: 0,
            }),
        }
    }

    pub fn options(&self) -> &FeedOptions {
        &self.options
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> FeedState {
        self.lock().state.clone()
    }

    /// Load page 1 and make it the whole feed.
    pub async fn load_first_page(&self) {
        let token = self.lock().issue();
        self.fetch_page(token, 1, MergeStrategy::Replace).await;
    }

    /// Load the page after `current_page` and append it.
    ///
    /// Does nothing while a load is running or once the last page is loaded.
    pub async fn load_next_page(&self) {
        let claimed = {
            let mut inner = self.lock();
            let state = &inner.state;
            if state.is_loading || inner.in_flight.is_some() || state.current_page >= state.last_page
            {
                None
            } else {
                let next_page = state.current_page + 1;
                Some((inner.issue(), next_page))
            }
        };

        let Some((token, next_page)) = claimed else {
            tracing::trace!("Next page skipped: busy or no more pages");
            return;
        };

        self.fetch_page(token, next_page, MergeStrategy::Append).await;
    }

    pub fn dismiss_error(&self) {
        self.lock().state.error = None;
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn fetch_page(&self, token: RequestToken, page: u32, merge: MergeStrategy) {
        let outcome = self.request(page).await;
        self.settle(token, page, merge, outcome);
    }

    async fn request(&self, page: u32) -> Outcome {
        if !self.probe.is_connected().await {
            return Outcome::Offline;
        }

        let request = PageRequest::new(page, self.options.page_size);
        tracing::debug!("Requesting page {} (size {})", request.page, request.size);

        match self.fetcher.fetch(request, &self.auth_token).await {
            Ok(response) if !response.is_success() => Outcome::Rejected(response.status),
            Ok(response) => match response.data {
                Some(data) if !data.is_empty() => Outcome::Loaded(data),
                _ => Outcome::Empty,
            },
            Err(e) => Outcome::Failed(e),
        }
    }

    fn settle(&self, token: RequestToken, page: u32, merge: MergeStrategy, outcome: Outcome) {
        let mut inner = self.lock();
        if inner.in_flight != Some(token) {
            tracing::debug!("Dropping superseded response for page {}", page);
            return;
        }
        inner.in_flight = None;

        let policy = self.options.failure_policy;
        let state = &mut inner.state;
        state.is_loading = false;

        match outcome {
            Outcome::Offline => {
                tracing::warn!("Network unavailable, page {} not requested", page);
                state.error = Some(FeedFailure::NetworkUnavailable);
            }
            Outcome::Loaded(data) => match merge {
                MergeStrategy::Replace => {
                    tracing::info!(
                        "Loaded first page: {} items, {} pages",
                        data.results.len(),
                        data.total_pages
                    );
                    state.items = data.results;
                    state.last_page = data.total_pages;
                    state.current_page = 1;
                }
                MergeStrategy::Append => {
                    tracing::info!("Loaded page {}: {} items", page, data.results.len());
                    state.items.extend(data.results);
                    state.current_page = page;
                }
            },
            Outcome::Empty => match merge {
                MergeStrategy::Replace => {
                    tracing::info!("Feed is empty");
                    state.items.clear();
                    state.current_page = 1;
                    state.last_page = 0;
                }
                MergeStrategy::Append => {
                    tracing::warn!("Page {} came back empty", page);
                    state.error = Some(FeedFailure::RequestFailed);
                }
            },
            Outcome::Rejected(status) => {
                tracing::warn!("Page {} rejected with status {}", page, status);
                match merge {
                    MergeStrategy::Replace => apply_failure(state, policy.first_page),
                    MergeStrategy::Append => state.error = Some(FeedFailure::RequestFailed),
                }
            }
            Outcome::Failed(e) => {
                tracing::error!("Page {} request failed: {}", page, e);
                apply_failure(state, policy.action_for(merge));
            }
        }
    }
}

fn apply_failure(state: &mut FeedState, action: FailureAction) {
    match action {
        FailureAction::LogOnly => {}
        FailureAction::ReportError => state.error = Some(FeedFailure::RequestFailed),
        FailureAction::ClearItems => state.items.clear(),
    }
}
