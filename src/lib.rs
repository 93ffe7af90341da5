//! # practice-feed
//!
//! A terminal client for the practice-log feed: a paginated list of practice
//! entries served over HTTP with bearer-token authentication.
//!
//! ## Architecture
//!
//! ```text
//! ConnectivityProbe ─┐
//!                    ├→ FeedController → FeedState → CLI / TUI
//! PageFetcher ───────┘                         ↑
//!                                   format (durations, counts, elapsed time)
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export PRACTICE_FEED_TOKEN=...
//!
//! # Print the first three pages
//! practice-feed list --pages 3
//!
//! # Browse with infinite scroll
//! practice-feed tui
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the configured fetcher,
/// probe and token into per-screen [`FeedController`](controller::FeedController)s.
pub mod app;

/// Command-line interface using clap.
///
/// - `list [--pages N]` - Print the feed
/// - `tui` - Launch the interactive viewer
/// - `format duration|count|elapsed` - Run a formatter
pub mod cli;

/// Network reachability checks.
///
/// - [`ConnectivityProbe`](connectivity::ConnectivityProbe): Async trait
/// - [`TcpProbe`](connectivity::TcpProbe): TCP connect with a timeout
pub mod connectivity;

/// Configuration loaded from `~/.config/practice-feed/config.toml`.
pub mod config;

/// Paginated feed state machine.
pub mod controller;

/// Core domain models.
///
/// - [`FeedItem`](domain::FeedItem): One practice-log entry
/// - [`FeedState`](domain::FeedState): Pagination state of a feed screen
/// - [`PageRequest`](domain::PageRequest) / [`PageResponse`](domain::PageResponse): Fetcher contract
pub mod domain;

/// Page fetching.
///
/// - [`PageFetcher`](fetcher::PageFetcher): Async trait for page sources
/// - [`HttpPageFetcher`](fetcher::http_fetcher::HttpPageFetcher): reqwest-based implementation
pub mod fetcher;

/// Duration, elapsed-time and count formatting.
pub mod format;

/// Terminal user interface built with ratatui.
///
/// Keybindings: j/k move, reaching the end loads the next page, R refreshes,
/// g scrolls to top, Enter dismisses a notice, q quits.
pub mod tui;
