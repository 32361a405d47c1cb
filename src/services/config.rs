//! Indentation configuration, as provided by the host.

use serde::{Deserialize, Serialize};

/// Host-sourced settings. `tab_size` seeds the Fibonacci ladder (both
/// initial terms equal it); values below 1 are a host misconfiguration and
/// are not validated here. `auto_correct` gates the auto-indent correction
/// handler; the explicit command stays active either way.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndentConfig {
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default = "default_auto_correct")]
    pub auto_correct: bool,
}

fn default_tab_size() -> u8 {
    4
}

fn default_auto_correct() -> bool {
    true
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            auto_correct: default_auto_correct(),
        }
    }
}

impl IndentConfig {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IndentConfig::default();
        assert_eq!(config.tab_size, 4);
        assert!(config.auto_correct);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = IndentConfig::from_json_str("{}").unwrap();
        assert_eq!(config.tab_size, 4);
        assert!(config.auto_correct);

        let config = IndentConfig::from_json_str(r#"{"tab_size": 2}"#).unwrap();
        assert_eq!(config.tab_size, 2);
        assert!(config.auto_correct);
    }

    #[test]
    fn test_round_trip() {
        let config = IndentConfig {
            tab_size: 8,
            auto_correct: false,
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored = IndentConfig::from_json_str(&json).unwrap();
        assert_eq!(restored.tab_size, 8);
        assert!(!restored.auto_correct);
    }
}
