//! Slack transport configuration

use serde::{Deserialize, Serialize};

/// Slack webhook transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlackConfig {
    /// Display name messages are posted under
    pub username: String,
    /// Timeout for webhook requests in seconds
    pub timeout_seconds: u64,
    /// Whether to verify SSL certificates
    pub verify_ssl: bool,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            username: "Beacon".to_string(),
            timeout_seconds: 30,
            verify_ssl: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SlackConfig::default();

        assert_eq!(config.username, "Beacon");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.verify_ssl);
    }

    #[test]
    fn test_config_serialization() {
        let config = SlackConfig {
            username: "CI".to_string(),
            timeout_seconds: 5,
            verify_ssl: false,
        };

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SlackConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.username, deserialized.username);
        assert_eq!(config.timeout_seconds, deserialized.timeout_seconds);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config: SlackConfig = serde_json::from_str(r#"{"username": "CI"}"#).unwrap();

        assert_eq!(config.username, "CI");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.verify_ssl);
    }
}
