use crate::error::{DaylogError, Result};
use crate::metadata::{ChannelInfo, UserInfo};
use crate::slack::{ChannelId, ChatMessage, MessageTs, UserId};
use crate::window::DayWindow;

/// Outcome of a lookup the export can degrade on
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    /// The platform answered, and the object does not exist
    NotFound,
    /// The call itself failed (network, auth, rate limit, ...)
    Failed(DaylogError),
}

/// Read-only slice of the chat platform the export needs
///
/// Calls are awaited one at a time; implementations need not be `Sync`.
#[allow(async_fn_in_trait)]
pub trait ChatApi {
    /// Channel metadata by id
    async fn channel_info(&self, channel: &ChannelId) -> Result<ChannelInfo>;

    /// User metadata by id
    async fn user_info(&self, user: &UserId) -> Lookup<UserInfo>;

    /// Up to `limit` messages inside `window`, newest first
    async fn history(
        &self,
        channel: &ChannelId,
        window: &DayWindow,
        limit: u16,
    ) -> Result<Vec<ChatMessage>>;

    /// Up to `limit` messages of the thread rooted at `parent`, oldest first.
    /// The root itself is usually included.
    async fn replies(
        &self,
        channel: &ChannelId,
        parent: &MessageTs,
        limit: u16,
    ) -> Lookup<Vec<ChatMessage>>;
}
