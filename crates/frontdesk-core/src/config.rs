use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FrontdeskError, Result};

/// Top-level configuration for the Frontdesk assistant.
///
/// Loaded from `~/.frontdesk/config.toml` by default. Each section
/// corresponds to a bounded context or cross-cutting concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrontdeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl FrontdeskConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FrontdeskConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FrontdeskError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Chat widget configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the assistant accepts messages.
    pub enabled: bool,
    /// Maximum user message length in characters.
    pub max_message_length: usize,
    /// Cosmetic "thinking" delay before a reply is shown, in milliseconds.
    /// Owned by the widget layer; the reply engine itself is synchronous.
    pub thinking_delay_ms: u64,
    /// Display name for the assistant in the widget header.
    pub assistant_name: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_message_length: 2000,
            thinking_delay_ms: 600,
            assistant_name: "Nexstar AI".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FrontdeskConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert!(config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 2000);
        assert_eq!(config.chat.thinking_delay_ms, 600);
        assert_eq!(config.chat.assistant_name, "Nexstar AI");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = FrontdeskConfig::default();
        config.chat.thinking_delay_ms = 0;
        config.chat.max_message_length = 500;
        config.general.log_level = "debug".to_string();

        config.save(&path).unwrap();
        let loaded = FrontdeskConfig::load(&path).unwrap();

        assert_eq!(loaded.chat.thinking_delay_ms, 0);
        assert_eq!(loaded.chat.max_message_length, 500);
        assert_eq!(loaded.general.log_level, "debug");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        assert!(FrontdeskConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        let config = FrontdeskConfig::load_or_default(&path);
        assert!(config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 2000);
    }

    #[test]
    fn test_load_or_default_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [[[ valid toml").unwrap();
        let config = FrontdeskConfig::load_or_default(&path);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nthinking_delay_ms = 50\n").unwrap();

        let config = FrontdeskConfig::load(&path).unwrap();
        assert_eq!(config.chat.thinking_delay_ms, 50);
        // Unspecified fields come from defaults.
        assert!(config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 2000);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.toml");
        FrontdeskConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_disabled_chat_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nenabled = false\n").unwrap();
        let config = FrontdeskConfig::load(&path).unwrap();
        assert!(!config.chat.enabled);
    }
}
