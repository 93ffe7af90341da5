pub mod item;
pub mod page;
pub mod state;

pub use item::FeedItem;
pub use page::{PageData, PageRequest, PageResponse, DEFAULT_PAGE_SIZE};
pub use state::{FeedFailure, FeedState};
