//! Channel and user metadata
//!
//! Key features:
//! - Lazy-loading: a user is only looked up when one of their messages is rendered
//! - Run-scoped: the cache lives in one [`NameCache`] value and dies with the run
//! - Graceful degradation: falls back to the raw user ID if the API fails

mod cache;
mod types;

pub use cache::{CacheStats, NameCache};
pub use types::{ChannelInfo, ChannelType, UserInfo};
