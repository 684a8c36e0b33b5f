use crate::slack::MessageTs;
use chrono::{DateTime, FixedOffset};

/// Leading whitespace per nesting level
pub const INDENT_UNIT: &str = "    ";

/// Rendered in place of `HH:MM` when a timestamp cannot be parsed
const UNKNOWN_TIME: &str = "--:--";

/// Render one message as a Markdown bullet
///
/// `- **HH:MM** [@name]: text`, with newlines in `text` collapsed to spaces and
/// `depth` levels of indentation in front.
pub fn format_line(
    ts: &MessageTs,
    name: &str,
    text: &str,
    depth: usize,
    offset: FixedOffset,
) -> String {
    format!(
        "{}- **{}** [@{}]: {}",
        INDENT_UNIT.repeat(depth),
        local_time(ts, offset),
        name,
        flatten_text(text)
    )
}

/// `HH:MM` of `ts` in `offset`
pub fn local_time(ts: &MessageTs, offset: FixedOffset) -> String {
    ts.epoch_seconds()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|utc| utc.with_timezone(&offset).format("%H:%M").to_string())
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

fn flatten_text(text: &str) -> String {
    text.replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
        .trim()
        .to_string()
}
