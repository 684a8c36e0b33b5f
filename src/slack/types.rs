use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Slack message timestamp (`<epoch seconds>.<micros>`), which doubles as the message id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageTs(pub String);

impl MessageTs {
    pub fn new(ts: impl Into<String>) -> Self {
        Self(ts.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whole epoch seconds, ignoring the fractional part
    pub fn epoch_seconds(&self) -> Option<i64> {
        let secs = self.0.split('.').next()?;
        secs.trim().parse().ok()
    }
}

/// A channel or thread message as the export pipeline sees it
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub ts: MessageTs,
    pub thread_ts: Option<MessageTs>,
    pub user: Option<UserId>,
    pub text: String,
    /// Set on platform-generated messages (joins, bot posts, ...)
    pub subtype: Option<String>,
}

impl ChatMessage {
    pub fn is_system(&self) -> bool {
        self.subtype.is_some()
    }

    /// True when this message is itself the root of a thread
    pub fn is_thread_root(&self) -> bool {
        self.thread_ts.as_ref() == Some(&self.ts)
    }
}
