//! Daily export pipeline: fetch, resolve names, render Markdown

mod document;
mod exporter;
mod fetcher;
mod format;

pub use document::LogDocument;
pub use exporter::Exporter;
pub use fetcher::{
    HISTORY_LIMIT, REPLY_LIMIT, fetch_history, fetch_thread_replies, history_truncated,
};
pub use format::{INDENT_UNIT, format_line, local_time};
