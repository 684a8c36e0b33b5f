use crate::error::{DaylogError, Result};
use crate::slack::ChannelId;
use crate::window::DayWindow;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::path::PathBuf;

/// Local offset the day boundaries are computed in (JST)
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = 9;

pub const DEFAULT_OUTPUT_DIR: &str = "logs";

#[derive(Debug, Clone)]
pub struct Settings {
    pub slack: SlackConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone)]
pub struct SlackConfig {
    /// Decoded bot token
    pub bot_token: String,
    /// Channels to export, in output order
    pub channel_ids: Vec<ChannelId>,
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
    pub utc_offset: FixedOffset,
    /// Export this local date instead of yesterday
    pub date_override: Option<NaiveDate>,
}

impl ExportConfig {
    /// Resolve the day to export relative to `now`
    pub fn window(&self, now: DateTime<Utc>) -> Result<DayWindow> {
        match self.date_override {
            Some(date) => DayWindow::for_date(date, self.utc_offset),
            None => DayWindow::previous_day(now, self.utc_offset),
        }
    }
}

pub fn load_settings() -> Result<Settings> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    Settings::from_lookup(|key| std::env::var(key).ok())
}

impl Settings {
    /// Build settings from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let channel_ids = parse_channel_ids(
            &lookup("SLACK_CHANNEL_IDS")
                .ok_or_else(|| DaylogError::Config("SLACK_CHANNEL_IDS not set".to_string()))?,
        )?;

        let bot_token = decode_token(
            &lookup("SLACK_BOT_TOKEN")
                .ok_or_else(|| DaylogError::Config("SLACK_BOT_TOKEN not set".to_string()))?,
        )?;

        let hours = match lookup("DAYLOG_UTC_OFFSET_HOURS") {
            Some(raw) => raw.trim().parse::<i32>().map_err(|_| {
                DaylogError::Config("Invalid DAYLOG_UTC_OFFSET_HOURS".to_string())
            })?,
            None => DEFAULT_UTC_OFFSET_HOURS,
        };
        let utc_offset = hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                DaylogError::Config(format!("DAYLOG_UTC_OFFSET_HOURS out of range: {}", hours))
            })?;

        let date_override = lookup("DAYLOG_DATE")
            .map(|raw| {
                NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                    DaylogError::Config(format!("Invalid DAYLOG_DATE (want YYYY-MM-DD): {}", raw))
                })
            })
            .transpose()?;

        let export = ExportConfig {
            output_dir: lookup("DAYLOG_OUTPUT_DIR")
                .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
                .into(),
            utc_offset,
            date_override,
        };

        Ok(Settings {
            slack: SlackConfig {
                bot_token,
                channel_ids,
            },
            export,
        })
    }
}

fn parse_channel_ids(raw: &str) -> Result<Vec<ChannelId>> {
    let ids: Vec<ChannelId> = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ChannelId::new)
        .collect();

    if ids.is_empty() {
        return Err(DaylogError::Config(
            "SLACK_CHANNEL_IDS contains no channel ids".to_string(),
        ));
    }
    Ok(ids)
}

fn decode_token(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| DaylogError::Config(format!("SLACK_BOT_TOKEN is not valid base64: {}", e)))?;
    let token = String::from_utf8(bytes)
        .map_err(|_| DaylogError::Config("SLACK_BOT_TOKEN does not decode to UTF-8".to_string()))?;

    let token = token.trim();
    if token.is_empty() {
        return Err(DaylogError::Config("SLACK_BOT_TOKEN is empty".to_string()));
    }
    Ok(token.to_string())
}
