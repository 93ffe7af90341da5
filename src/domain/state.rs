use std::fmt;

use super::FeedItem;

/// The two ways a load can fail, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedFailure {
    NetworkUnavailable,
    RequestFailed,
}

impl FeedFailure {
    pub fn message(self) -> &'static str {
        match self {
            FeedFailure::NetworkUnavailable => "network unavailable",
            FeedFailure::RequestFailed => "request failed, please retry",
        }
    }
}

impl fmt::Display for FeedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Pagination state of one feed screen.
///
/// `items` keeps server order. `last_page == 0` means the total is not
/// known yet.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub items: Vec<FeedItem>,
    pub current_page: u32,
    pub last_page: u32,
    pub is_loading: bool,
    pub error: Option<FeedFailure>,
}

impl FeedState {
    /// Empty state of a screen whose first load is about to start.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            last_page: 0,
            is_loading: true,
            error: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.map(FeedFailure::message)
    }

    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
