use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default)]
    pub request_timeout_seconds: Option<u64>,
    #[serde(default = "default_preserve_image_mime_type")]
    pub preserve_image_mime_type: bool,
}

fn default_model() -> String {
    global_constants::DEFAULT_MODEL.to_string()
}

fn default_api_base_url() -> String {
    global_constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_temperature() -> f32 {
    global_constants::DEFAULT_TEMPERATURE
}

fn default_max_output_tokens() -> u32 {
    global_constants::DEFAULT_MAX_OUTPUT_TOKENS
}

fn default_preserve_image_mime_type() -> bool {
    true
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_base_url: default_api_base_url(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            request_timeout_seconds: None,
            preserve_image_mime_type: default_preserve_image_mime_type(),
        }
    }
}

impl UserSettings {
    /// A non-blank override wins over the stored key; blank keys count as absent.
    pub fn resolve_api_key(&self, env_override: Option<String>) -> Option<String> {
        env_override
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds
            .filter(|seconds| *seconds > 0)
            .map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert!(settings.api_key.is_none());
        assert_eq!(settings.model, global_constants::DEFAULT_MODEL);
        assert_eq!(settings.api_base_url, global_constants::DEFAULT_API_BASE_URL);
        assert_eq!(settings.temperature, 0.1);
        assert_eq!(settings.max_output_tokens, 8192);
        assert!(settings.request_timeout().is_none());
        assert!(settings.preserve_image_mime_type);
    }

    #[test]
    fn test_user_settings_deserialization_fills_missing_fields() {
        let json = r#"{ "api_key": "abc123" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.api_key.as_deref(), Some("abc123"));
        assert_eq!(settings.model, global_constants::DEFAULT_MODEL);
        assert!(settings.preserve_image_mime_type);
    }

    #[test]
    fn test_resolve_api_key_prefers_env_override() {
        let settings = UserSettings {
            api_key: Some("stored".to_string()),
            ..UserSettings::default()
        };

        let key = settings.resolve_api_key(Some("from-env".to_string()));

        assert_eq!(key.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_resolve_api_key_ignores_blank_values() {
        let settings = UserSettings {
            api_key: Some("   ".to_string()),
            ..UserSettings::default()
        };

        assert!(settings.resolve_api_key(Some(String::new())).is_none());
    }

    #[test]
    fn test_request_timeout_treats_zero_as_unbounded() {
        let settings = UserSettings {
            request_timeout_seconds: Some(0),
            ..UserSettings::default()
        };

        assert!(settings.request_timeout().is_none());
    }
}
