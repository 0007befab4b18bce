//! Chat front-end configuration, loadable from TOML.

use cv_nlu::PredictorConfig;
use serde::Deserialize;

/// Top-level configuration for `cv-chat`. Every field has a default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatConfig {
    /// Classification tables file. None uses the built-in tables.
    #[serde(default)]
    pub tables_path: Option<String>,
    /// Emit logs as JSON instead of human-readable text.
    #[serde(default)]
    pub log_json: bool,
    /// Zero-shot predictor endpoint.
    #[serde(default)]
    pub predictor: PredictorConfig,
}

impl ChatConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: ChatConfig = toml::from_str("").unwrap();
        assert!(config.tables_path.is_none());
        assert!(!config.log_json);
        assert_eq!(config.predictor.host, "http://localhost:8080");
        assert_eq!(config.predictor.model, "urchade/gliner_medium-v2.1");
        assert_eq!(config.predictor.timeout_secs, 10);
        assert!(config.predictor.enabled);
    }

    #[test]
    fn deserialize_full_config() {
        let toml = r#"
tables_path = "/opt/carevoice/tables.toml"
log_json = true

[predictor]
host = "http://gliner.internal:9000"
model = "urchade/gliner_small-v2.1"
timeout_secs = 4
enabled = false
"#;
        let config: ChatConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.tables_path.as_deref(), Some("/opt/carevoice/tables.toml"));
        assert!(config.log_json);
        assert_eq!(config.predictor.host, "http://gliner.internal:9000");
        assert_eq!(config.predictor.timeout_secs, 4);
        assert!(!config.predictor.enabled);
    }

    #[test]
    fn partial_predictor_section_fills_defaults() {
        let toml = r#"
[predictor]
enabled = false
"#;
        let config: ChatConfig = toml::from_str(toml).unwrap();
        assert!(!config.predictor.enabled);
        assert_eq!(config.predictor.host, "http://localhost:8080");
    }

    #[test]
    fn missing_file_is_error() {
        assert!(ChatConfig::from_file("/nonexistent/chat.toml").is_err());
    }
}
