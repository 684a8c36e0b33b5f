use crate::config::SlackConfig;
use crate::error::{DaylogError, Result};
use crate::metadata::{ChannelInfo, ChannelType, UserInfo};
use crate::slack::{ChannelId, ChatApi, ChatMessage, Lookup, MessageTs, UserId};
use crate::window::DayWindow;
use slack_morphism::errors::SlackClientError;
use slack_morphism::prelude::*;
use std::sync::Arc;

/// Slack API error codes meaning "the object does not exist"
const NOT_FOUND_CODES: &[&str] = &["user_not_found", "users_not_found", "thread_not_found"];

pub struct SlackClient {
    client: Arc<SlackHyperClient>,
    token: SlackApiToken,
}

impl SlackClient {
    pub fn new(config: &SlackConfig) -> Result<Self> {
        let connector = SlackClientHyperConnector::new()
            .map_err(|e| DaylogError::SlackApi(e.to_string()))?;

        let client = Arc::new(slack_morphism::SlackClient::new(connector));
        let token = SlackApiToken::new(config.bot_token.clone().into());

        Ok(Self { client, token })
    }
}

impl ChatApi for SlackClient {
    /// Get channel information from Slack API
    async fn channel_info(&self, channel: &ChannelId) -> Result<ChannelInfo> {
        let session = self.client.open_session(&self.token);

        let request =
            SlackApiConversationsInfoRequest::new(SlackChannelId(channel.as_str().to_string()));

        let response = session
            .conversations_info(&request)
            .await
            .map_err(|e| DaylogError::SlackApi(e.to_string()))?;

        let channel_info = response.channel;

        let channel_type = if channel_info.flags.is_im.unwrap_or(false) {
            ChannelType::DirectMessage
        } else if channel_info.flags.is_mpim.unwrap_or(false) {
            ChannelType::MultiPartyDirectMessage
        } else if channel_info.flags.is_private.unwrap_or(false) {
            ChannelType::PrivateChannel
        } else {
            ChannelType::PublicChannel
        };

        Ok(ChannelInfo {
            id: channel_info.id.to_string(),
            name: channel_info
                .name
                .unwrap_or_else(|| channel.as_str().to_string()),
            channel_type,
        })
    }

    /// Get user information from Slack API
    async fn user_info(&self, user: &UserId) -> Lookup<UserInfo> {
        let session = self.client.open_session(&self.token);

        let request = SlackApiUsersInfoRequest::new(SlackUserId(user.as_str().to_string()));

        match session.users_info(&request).await {
            Ok(response) => {
                let found = response.user;
                Lookup::Found(UserInfo {
                    id: found.id.to_string(),
                    name: found.name.unwrap_or_else(|| user.as_str().to_string()),
                    real_name: found.real_name,
                    is_bot: found.flags.is_bot.unwrap_or(false),
                })
            }
            Err(e) if is_not_found(&e) => Lookup::NotFound,
            Err(e) => Lookup::Failed(DaylogError::SlackApi(e.to_string())),
        }
    }

    async fn history(
        &self,
        channel: &ChannelId,
        window: &DayWindow,
        limit: u16,
    ) -> Result<Vec<ChatMessage>> {
        let session = self.client.open_session(&self.token);

        let request = SlackApiConversationsHistoryRequest::new()
            .with_channel(SlackChannelId(channel.as_str().to_string()))
            .with_oldest(SlackTs::new(window.oldest_ts()))
            .with_latest(SlackTs::new(window.latest_ts()))
            .with_inclusive(true)
            .with_limit(limit);

        let response = session
            .conversations_history(&request)
            .await
            .map_err(|e| DaylogError::SlackApi(e.to_string()))?;

        tracing::debug!(
            channel_id = %channel.as_str(),
            count = response.messages.len(),
            "Received channel history"
        );

        Ok(response.messages.into_iter().map(to_chat_message).collect())
    }

    async fn replies(
        &self,
        channel: &ChannelId,
        parent: &MessageTs,
        limit: u16,
    ) -> Lookup<Vec<ChatMessage>> {
        let session = self.client.open_session(&self.token);

        let request = SlackApiConversationsRepliesRequest::new(
            SlackChannelId(channel.as_str().to_string()),
            SlackTs::new(parent.as_str().to_string()),
        )
        .with_limit(limit);

        match session.conversations_replies(&request).await {
            Ok(response) => {
                Lookup::Found(response.messages.into_iter().map(to_chat_message).collect())
            }
            Err(e) if is_not_found(&e) => Lookup::NotFound,
            Err(e) => Lookup::Failed(DaylogError::SlackApi(e.to_string())),
        }
    }
}

fn is_not_found(error: &SlackClientError) -> bool {
    matches!(error, SlackClientError::ApiError(api) if NOT_FOUND_CODES.contains(&api.code.as_str()))
}

fn to_chat_message(message: SlackHistoryMessage) -> ChatMessage {
    ChatMessage {
        ts: MessageTs::new(message.origin.ts.to_string()),
        thread_ts: message
            .origin
            .thread_ts
            .map(|ts| MessageTs::new(ts.to_string())),
        user: message.sender.user.map(|u| UserId::new(u.to_string())),
        text: message.content.text.unwrap_or_default(),
        subtype: message.subtype.map(|subtype| subtype_name(&subtype)),
    }
}

/// Wire name of a message subtype (e.g. `channel_join`)
fn subtype_name(subtype: &SlackMessageEventType) -> String {
    serde_json::to_value(subtype)
        .ok()
        .and_then(|value| value.as_str().map(str::to_owned))
        .unwrap_or_else(|| format!("{:?}", subtype))
}
