use crate::slack::ChannelId;
use std::fmt::Display;

/// Append-only Markdown log for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDocument {
    date: String,
    lines: Vec<String>,
}

impl LogDocument {
    pub fn new(date: impl Into<String>) -> Self {
        let date = date.into();
        let title = format!("# Slack log ({})\n", date);
        Self {
            date,
            lines: vec![title],
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn push_heading(&mut self, channel_name: &str) {
        self.lines.push(format!("\n## {}\n", channel_name));
    }

    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn push_channel_error(&mut self, channel: &ChannelId, error: &impl Display) {
        self.lines.push(format!(
            "\n> Error fetching messages for channel {}: {}\n",
            channel.as_str(),
            error
        ));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
