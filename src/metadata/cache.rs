//! Per-run user name cache

use crate::slack::{ChatApi, Lookup, UserId};
use std::collections::HashMap;

/// Cache statistics for the end-of-run summary
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub api_calls: u64,
    pub not_found: u64,
    pub api_errors: u64,
}

/// User id to display name, populated lazily for one run
///
/// Only successful lookups are stored. A user that is not found, or whose
/// lookup fails, renders as its raw id and is looked up again the next time
/// it appears.
#[derive(Debug, Default)]
pub struct NameCache {
    names: HashMap<String, String>,
    stats: CacheStats,
}

impl NameCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display name for `user`, falling back to the raw id
    pub async fn resolve<A: ChatApi>(&mut self, api: &A, user: &UserId) -> String {
        if let Some(name) = self.names.get(user.as_str()) {
            self.stats.hits += 1;
            tracing::trace!(user_id = %user.as_str(), user = %name, "User cache hit");
            return name.clone();
        }

        self.stats.misses += 1;
        self.stats.api_calls += 1;
        tracing::debug!(user_id = %user.as_str(), "User cache miss, fetching from Slack API");

        match api.user_info(user).await {
            Lookup::Found(info) => {
                let name = info.preferred_name().to_string();
                tracing::debug!(
                    user_id = %user.as_str(),
                    user = %name,
                    is_bot = info.is_bot,
                    "Fetched and cached user info"
                );
                self.names.insert(user.as_str().to_string(), name.clone());
                name
            }
            Lookup::NotFound => {
                self.stats.not_found += 1;
                tracing::warn!(user_id = %user.as_str(), "User not found, using ID as fallback");
                user.as_str().to_string()
            }
            Lookup::Failed(e) => {
                self.stats.api_errors += 1;
                tracing::warn!(
                    user_id = %user.as_str(),
                    error = %e,
                    "Failed to fetch user info, using ID as fallback"
                );
                user.as_str().to_string()
            }
        }
    }

    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Log cache statistics
    pub fn log_stats(&self) {
        let lookups = self.stats.hits + self.stats.misses;
        let hit_rate = if lookups > 0 {
            (self.stats.hits as f32 / lookups as f32 * 100.0) as u32
        } else {
            0
        };

        tracing::info!(
            users_cached = self.len(),
            hit_rate = hit_rate,
            api_calls = self.stats.api_calls,
            not_found = self.stats.not_found,
            api_errors = self.stats.api_errors,
            "User name cache statistics"
        );
    }
}
