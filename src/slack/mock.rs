//! In-memory `ChatApi` with canned responses

use crate::error::{DaylogError, Result};
use crate::metadata::{ChannelInfo, ChannelType, UserInfo};
use crate::slack::{ChannelId, ChatApi, ChatMessage, Lookup, MessageTs, UserId};
use crate::window::DayWindow;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct MockChatApi {
    channels: HashMap<String, std::result::Result<ChannelInfo, String>>,
    users: HashMap<String, UserResponse>,
    history: HashMap<String, std::result::Result<Vec<ChatMessage>, String>>,
    replies: HashMap<(String, String), std::result::Result<Vec<ChatMessage>, String>>,
    user_calls: Mutex<HashMap<String, usize>>,
    reply_calls: Mutex<Vec<(String, u16)>>,
    history_calls: Mutex<Vec<HistoryCall>>,
}

/// Arguments one `conversations.history` call was made with
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryCall {
    pub channel: String,
    pub oldest: String,
    pub latest: String,
    pub limit: u16,
}

enum UserResponse {
    Found(UserInfo),
    NotFound,
    Failed(String),
}

impl MockChatApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel(mut self, id: &str, name: &str, messages: Vec<ChatMessage>) -> Self {
        self.channels.insert(
            id.to_string(),
            Ok(ChannelInfo {
                id: id.to_string(),
                name: name.to_string(),
                channel_type: ChannelType::PublicChannel,
            }),
        );
        self.history.insert(id.to_string(), Ok(messages));
        self
    }

    pub fn with_channel_error(mut self, id: &str, error: &str) -> Self {
        self.channels.insert(id.to_string(), Err(error.to_string()));
        self
    }

    pub fn with_history_error(mut self, id: &str, name: &str, error: &str) -> Self {
        self = self.with_channel(id, name, Vec::new());
        self.history.insert(id.to_string(), Err(error.to_string()));
        self
    }

    pub fn with_user(mut self, id: &str, name: &str, real_name: Option<&str>) -> Self {
        self.users.insert(
            id.to_string(),
            UserResponse::Found(UserInfo {
                id: id.to_string(),
                name: name.to_string(),
                real_name: real_name.map(str::to_string),
                is_bot: false,
            }),
        );
        self
    }

    pub fn with_missing_user(mut self, id: &str) -> Self {
        self.users.insert(id.to_string(), UserResponse::NotFound);
        self
    }

    pub fn with_failing_user(mut self, id: &str) -> Self {
        self.users
            .insert(id.to_string(), UserResponse::Failed("ratelimited".to_string()));
        self
    }

    pub fn with_replies(mut self, channel: &str, parent: &str, messages: Vec<ChatMessage>) -> Self {
        self.replies
            .insert((channel.to_string(), parent.to_string()), Ok(messages));
        self
    }

    pub fn with_replies_error(mut self, channel: &str, parent: &str, error: &str) -> Self {
        self.replies.insert(
            (channel.to_string(), parent.to_string()),
            Err(error.to_string()),
        );
        self
    }

    /// How many times `users.info` was called for `user`
    pub fn user_calls(&self, user: &str) -> usize {
        self.user_calls
            .lock()
            .unwrap()
            .get(user)
            .copied()
            .unwrap_or(0)
    }

    /// Parent timestamps `conversations.replies` was called with
    pub fn reply_calls(&self) -> Vec<String> {
        self.reply_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(parent, _)| parent.clone())
            .collect()
    }

    /// Limits `conversations.replies` was called with
    pub fn reply_limits(&self) -> Vec<u16> {
        self.reply_calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, limit)| *limit)
            .collect()
    }

    pub fn history_calls(&self) -> Vec<HistoryCall> {
        self.history_calls.lock().unwrap().clone()
    }
}

impl ChatApi for MockChatApi {
    async fn channel_info(&self, channel: &ChannelId) -> Result<ChannelInfo> {
        match self.channels.get(channel.as_str()) {
            Some(Ok(info)) => Ok(info.clone()),
            Some(Err(e)) => Err(DaylogError::SlackApi(e.clone())),
            None => Err(DaylogError::SlackApi("channel_not_found".to_string())),
        }
    }

    async fn user_info(&self, user: &UserId) -> Lookup<UserInfo> {
        *self
            .user_calls
            .lock()
            .unwrap()
            .entry(user.as_str().to_string())
            .or_default() += 1;

        match self.users.get(user.as_str()) {
            Some(UserResponse::Found(info)) => Lookup::Found(info.clone()),
            Some(UserResponse::Failed(e)) => Lookup::Failed(DaylogError::SlackApi(e.clone())),
            Some(UserResponse::NotFound) | None => Lookup::NotFound,
        }
    }

    async fn history(
        &self,
        channel: &ChannelId,
        window: &DayWindow,
        limit: u16,
    ) -> Result<Vec<ChatMessage>> {
        self.history_calls.lock().unwrap().push(HistoryCall {
            channel: channel.as_str().to_string(),
            oldest: window.oldest_ts(),
            latest: window.latest_ts(),
            limit,
        });

        match self.history.get(channel.as_str()) {
            Some(Ok(messages)) => Ok(messages.iter().take(limit as usize).cloned().collect()),
            Some(Err(e)) => Err(DaylogError::SlackApi(e.clone())),
            None => Ok(Vec::new()),
        }
    }

    async fn replies(
        &self,
        channel: &ChannelId,
        parent: &MessageTs,
        limit: u16,
    ) -> Lookup<Vec<ChatMessage>> {
        self.reply_calls
            .lock()
            .unwrap()
            .push((parent.as_str().to_string(), limit));

        let key = (channel.as_str().to_string(), parent.as_str().to_string());
        match self.replies.get(&key) {
            Some(Ok(messages)) => {
                Lookup::Found(messages.iter().take(limit as usize).cloned().collect())
            }
            Some(Err(e)) => Lookup::Failed(DaylogError::SlackApi(e.clone())),
            None => Lookup::NotFound,
        }
    }
}

/// A human message at `ts`
pub fn message(ts: &str, user: &str, text: &str) -> ChatMessage {
    ChatMessage {
        ts: MessageTs::new(ts),
        thread_ts: None,
        user: Some(UserId::new(user)),
        text: text.to_string(),
        subtype: None,
    }
}

/// A human message at `ts` that starts a thread
pub fn thread_root(ts: &str, user: &str, text: &str) -> ChatMessage {
    ChatMessage {
        thread_ts: Some(MessageTs::new(ts)),
        ..message(ts, user, text)
    }
}

/// A reply at `ts` inside the thread rooted at `parent`
pub fn reply(ts: &str, parent: &str, user: &str, text: &str) -> ChatMessage {
    ChatMessage {
        thread_ts: Some(MessageTs::new(parent)),
        ..message(ts, user, text)
    }
}

/// A platform-generated message
pub fn system(ts: &str, subtype: &str, text: &str) -> ChatMessage {
    ChatMessage {
        subtype: Some(subtype.to_string()),
        ..message(ts, "USLACKBOT", text)
    }
}
