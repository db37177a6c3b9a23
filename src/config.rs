//! Bridge configuration.

use serde::{Deserialize, Serialize};

use crate::error::BridgeResult;
use crate::CHANNEL_NAME;

/// Configuration for a bridge and its channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BridgeConfig {
    /// Channel name the bridge is registered under.
    pub channel: String,
    /// Whether unimplemented method names are logged.
    pub log_unimplemented: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self { channel: CHANNEL_NAME.to_string(), log_unimplemented: true }
    }
}

impl BridgeConfig {
    /// Parse a configuration from a TOML document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_toml_str(raw: &str) -> BridgeResult<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.channel, "ve_vod_controls");
        assert!(config.log_unimplemented);
    }

    #[test]
    fn test_toml_overrides() {
        let config = BridgeConfig::from_toml_str(
            r#"
            channel = "test_channel"
            log_unimplemented = false
            "#,
        )
        .unwrap();
        assert_eq!(config.channel, "test_channel");
        assert!(!config.log_unimplemented);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BridgeConfig::from_toml_str(r#"channel = "other""#).unwrap();
        assert_eq!(config.channel, "other");
        assert!(config.log_unimplemented);
    }
}
