pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod metadata;
pub mod slack;
pub mod storage;
pub mod window;

pub use error::{DaylogError, Result};
