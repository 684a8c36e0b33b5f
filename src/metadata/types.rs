//! Channel and user metadata

use serde::{Deserialize, Serialize};

/// Channel metadata information
#[derive(Debug, Clone)]
pub struct ChannelInfo {
    /// Channel ID (e.g., C09NU1KFXHT)
    pub id: String,

    /// Channel name without # (e.g., "engineering", "general")
    pub name: String,

    /// Channel type
    pub channel_type: ChannelType,
}

/// Channel type enumeration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ChannelType {
    PublicChannel,
    PrivateChannel,
    DirectMessage,
    MultiPartyDirectMessage,
}

impl ChannelInfo {
    /// Get display name with # prefix for channels
    pub fn display_name(&self) -> String {
        match self.channel_type {
            ChannelType::PublicChannel | ChannelType::PrivateChannel => {
                format!("#{}", self.name)
            }
            _ => self.name.clone(),
        }
    }
}

/// User metadata information
#[derive(Debug, Clone)]
pub struct UserInfo {
    /// User ID (e.g., U09JDBT2MCM)
    pub id: String,

    /// Username/handle (e.g., "john.doe")
    pub name: String,

    /// Real name (e.g., "John Doe")
    pub real_name: Option<String>,

    /// Is this a bot?
    pub is_bot: bool,
}

impl UserInfo {
    /// Real name when non-empty (kept verbatim), otherwise the handle
    pub fn preferred_name(&self) -> &str {
        self.real_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }
}
