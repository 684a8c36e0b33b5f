mod api;
mod client;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use api::{ChatApi, Lookup};
pub use client::SlackClient;
pub use types::{ChannelId, ChatMessage, MessageTs, UserId};
