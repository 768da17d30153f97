//! MessageType - Outreach channel

use serde::{Deserialize, Serialize};

/// Outreach channel a message is drafted for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Email,
    Phone,
    Linkedin,
}

impl MessageType {
    /// Every supported channel, in display order
    pub const ALL: [MessageType; 3] = [
        MessageType::Email,
        MessageType::Phone,
        MessageType::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Email => "email",
            MessageType::Phone => "phone",
            MessageType::Linkedin => "linkedin",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(MessageType::Email),
            "phone" => Ok(MessageType::Phone),
            "linkedin" => Ok(MessageType::Linkedin),
            _ => Err(format!("Unknown message type: {}", s)),
        }
    }
}
