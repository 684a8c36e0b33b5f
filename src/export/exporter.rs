use crate::error::Result;
use crate::export::document::LogDocument;
use crate::export::fetcher::{fetch_history, fetch_thread_replies};
use crate::export::format::format_line;
use crate::logging::{Timer, log_error};
use crate::metadata::NameCache;
use crate::slack::{ChannelId, ChatApi, ChatMessage};
use crate::window::DayWindow;

/// Rendered for messages that carry no user id
const UNKNOWN_USER: &str = "unknown";

/// Drives one day's export across the configured channels
pub struct Exporter<'a, A: ChatApi> {
    api: &'a A,
    names: NameCache,
}

impl<'a, A: ChatApi> Exporter<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self::with_cache(api, NameCache::new())
    }

    pub fn with_cache(api: &'a A, names: NameCache) -> Self {
        Self { api, names }
    }

    pub fn names(&self) -> &NameCache {
        &self.names
    }

    /// Build the day's document, one section per channel in the given order
    ///
    /// Channel-level API failures become inline error notices; they never
    /// abort the run.
    pub async fn run(&mut self, channels: &[ChannelId], window: &DayWindow) -> LogDocument {
        let _timer = Timer::new("export_day");
        let mut document = LogDocument::new(window.date_label());

        tracing::info!(
            date = %window.date_label(),
            start = %window.start(),
            end = %window.end(),
            channels = channels.len(),
            "Exporting day"
        );

        for channel in channels {
            self.export_channel(channel, window, &mut document).await;
        }

        self.names.log_stats();
        document
    }

    async fn export_channel(
        &mut self,
        channel: &ChannelId,
        window: &DayWindow,
        document: &mut LogDocument,
    ) {
        let _timer = Timer::new(format!("export_channel:{}", channel.as_str()));

        let info = match self.api.channel_info(channel).await {
            Ok(info) => info,
            Err(e) => {
                log_error("channel_info", &e);
                tracing::warn!(channel_id = %channel.as_str(), "Skipping channel");
                document.push_channel_error(channel, &e);
                return;
            }
        };
        document.push_heading(&info.display_name());

        match self.render_channel(channel, window).await {
            Ok(lines) => {
                tracing::info!(
                    channel_id = %channel.as_str(),
                    channel = %info.name,
                    lines = lines.len(),
                    "Channel exported"
                );
                for line in lines {
                    document.push_line(line);
                }
            }
            Err(e) => {
                log_error("channel_history", &e);
                document.push_channel_error(channel, &e);
            }
        }
    }

    async fn render_channel(
        &mut self,
        channel: &ChannelId,
        window: &DayWindow,
    ) -> Result<Vec<String>> {
        let messages = fetch_history(self.api, channel, window).await?;
        let mut lines = Vec::with_capacity(messages.len());

        for message in &messages {
            lines.push(self.render_message(message, 0, window).await);

            if message.is_thread_root() {
                let replies = fetch_thread_replies(self.api, channel, message).await;
                tracing::debug!(
                    channel_id = %channel.as_str(),
                    thread_ts = %message.ts.as_str(),
                    replies = replies.len(),
                    "Fetched thread"
                );
                for reply in &replies {
                    lines.push(self.render_message(reply, 1, window).await);
                }
            }
        }

        Ok(lines)
    }

    async fn render_message(
        &mut self,
        message: &ChatMessage,
        depth: usize,
        window: &DayWindow,
    ) -> String {
        let name = match &message.user {
            Some(user) => self.names.resolve(self.api, user).await,
            None => UNKNOWN_USER.to_string(),
        };
        format_line(&message.ts, &name, &message.text, depth, window.offset())
    }
}
