use crate::error::Result;
use crate::slack::{ChannelId, ChatApi, ChatMessage, Lookup};
use crate::window::DayWindow;

/// Top-level messages fetched per channel per day; there is no pagination
pub const HISTORY_LIMIT: u16 = 1000;

/// Replies fetched per thread
pub const REPLY_LIMIT: u16 = 50;

/// Human messages of `channel` inside `window`, oldest first
///
/// Slack returns history newest first; the list is reversed, not re-sorted.
pub async fn fetch_history<A: ChatApi>(
    api: &A,
    channel: &ChannelId,
    window: &DayWindow,
) -> Result<Vec<ChatMessage>> {
    let messages = api.history(channel, window, HISTORY_LIMIT).await?;
    let fetched = messages.len();

    if history_truncated(fetched) {
        tracing::warn!(
            channel_id = %channel.as_str(),
            limit = HISTORY_LIMIT,
            "History limit reached, older messages of the day are dropped"
        );
    }

    let kept: Vec<ChatMessage> = messages
        .into_iter()
        .rev()
        .filter(|m| !m.is_system())
        .collect();

    tracing::debug!(
        channel_id = %channel.as_str(),
        fetched = fetched,
        kept = kept.len(),
        "Filtered channel history"
    );

    Ok(kept)
}

/// True when a history page came back full, so older messages may be missing
pub fn history_truncated(fetched: usize) -> bool {
    fetched >= HISTORY_LIMIT as usize
}

/// Human replies in the thread rooted at `root`, oldest first
///
/// Lookup failures degrade to an empty list.
pub async fn fetch_thread_replies<A: ChatApi>(
    api: &A,
    channel: &ChannelId,
    root: &ChatMessage,
) -> Vec<ChatMessage> {
    match api.replies(channel, &root.ts, REPLY_LIMIT).await {
        Lookup::Found(messages) => messages
            .into_iter()
            .filter(|m| m.ts != root.ts && !m.is_system())
            .collect(),
        Lookup::NotFound => {
            tracing::debug!(
                channel_id = %channel.as_str(),
                thread_ts = %root.ts.as_str(),
                "Thread not found, skipping replies"
            );
            Vec::new()
        }
        Lookup::Failed(e) => {
            tracing::warn!(
                channel_id = %channel.as_str(),
                thread_ts = %root.ts.as_str(),
                error = %e,
                "Failed to fetch thread replies, skipping"
            );
            Vec::new()
        }
    }
}
