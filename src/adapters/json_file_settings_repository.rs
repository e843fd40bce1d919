use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::SettingsRepository;
use crate::core::models::UserSettings;
use crate::global_constants;

pub struct JsonFileSettingsRepository {
    settings_path: PathBuf,
    api_key_override: Option<String>,
}

impl JsonFileSettingsRepository {
    pub fn at_default_location() -> Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        let api_key_override = std::env::var(global_constants::API_KEY_ENV_VAR).ok();

        Ok(Self::at_path(settings_path, api_key_override))
    }

    pub fn at_path(settings_path: PathBuf, api_key_override: Option<String>) -> Self {
        Self {
            settings_path,
            api_key_override,
        }
    }

    pub fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    fn get_settings_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

impl SettingsRepository for JsonFileSettingsRepository {
    fn load_settings(&self) -> Result<UserSettings> {
        if !self.settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            return Ok(UserSettings::default());
        }

        let contents = std::fs::read_to_string(&self.settings_path)
            .with_context(|| format!("Failed to read {:?}", self.settings_path))?;
        let settings: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed settings file {:?}", self.settings_path))?;

        log::info!("[SETTINGS] Loaded settings from {:?}", self.settings_path);
        log::debug!("[SETTINGS] Model: {}", settings.model);

        Ok(settings)
    }

    fn save_settings(&self, settings: &UserSettings) -> Result<()> {
        if let Some(parent) = self.settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", self.settings_path);
        Ok(())
    }

    fn load_api_key(&self) -> Result<Option<String>> {
        if let Some(api_key) = self
            .api_key_override
            .as_deref()
            .filter(|key| !key.trim().is_empty())
        {
            return Ok(Some(api_key.to_string()));
        }

        let settings = self.load_settings()?;
        Ok(settings.resolve_api_key(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_temp_repository(test_name: &str, api_key_override: Option<&str>) -> (PathBuf, JsonFileSettingsRepository) {
        let temp_dir = std::env::temp_dir()
            .join("image-text-formatter-test")
            .join(format!("{}-{}", test_name, std::process::id()));
        std::fs::remove_dir_all(&temp_dir).ok();

        let repository = JsonFileSettingsRepository::at_path(
            temp_dir.join(global_constants::SETTINGS_FILE_NAME),
            api_key_override.map(str::to_string),
        );

        (temp_dir, repository)
    }

    #[test]
    fn test_load_settings_without_file_returns_defaults() {
        let (temp_dir, repository) = create_temp_repository("defaults", None);

        let settings = repository.load_settings().unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(!repository.settings_path().exists());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (temp_dir, repository) = create_temp_repository("roundtrip", None);
        let original_settings = UserSettings {
            api_key: Some("stored-key".to_string()),
            model: "gemini-test".to_string(),
            request_timeout_seconds: Some(45),
            preserve_image_mime_type: false,
            ..UserSettings::default()
        };

        repository.save_settings(&original_settings).unwrap();
        let loaded_settings = repository.load_settings().unwrap();

        assert_eq!(loaded_settings, original_settings);

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_api_key_lifecycle() {
        let (temp_dir, repository) = create_temp_repository("lifecycle", None);

        assert!(repository.load_api_key().unwrap().is_none());

        repository.save_api_key("  my-key \n").unwrap();
        assert_eq!(repository.load_api_key().unwrap().as_deref(), Some("my-key"));

        repository.clear_api_key().unwrap();
        assert!(repository.load_api_key().unwrap().is_none());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_save_api_key_rejects_blank_key() {
        let (temp_dir, repository) = create_temp_repository("blank", None);

        assert!(repository.save_api_key("   ").is_err());

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_save_api_key_preserves_other_settings() {
        let (temp_dir, repository) = create_temp_repository("preserve", None);
        let settings = UserSettings {
            model: "gemini-custom".to_string(),
            ..UserSettings::default()
        };
        repository.save_settings(&settings).unwrap();

        repository.save_api_key("my-key").unwrap();

        let loaded_settings = repository.load_settings().unwrap();
        assert_eq!(loaded_settings.model, "gemini-custom");
        assert_eq!(loaded_settings.api_key.as_deref(), Some("my-key"));

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_env_override_wins_over_stored_key() {
        let (temp_dir, repository) = create_temp_repository("override", Some("env-key"));
        repository.save_api_key("stored-key").unwrap();

        assert_eq!(repository.load_api_key().unwrap().as_deref(), Some("env-key"));

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_env_override_is_used_when_settings_file_is_malformed() {
        let (temp_dir, repository) = create_temp_repository("override-malformed", Some("env-key"));
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(repository.settings_path(), "{ not json").unwrap();

        assert_eq!(repository.load_api_key().unwrap().as_deref(), Some("env-key"));

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_blank_env_override_falls_back_to_stored_key() {
        let (temp_dir, repository) = create_temp_repository("override-blank", Some("  "));
        repository.save_api_key("stored-key").unwrap();

        assert_eq!(repository.load_api_key().unwrap().as_deref(), Some("stored-key"));

        std::fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let (temp_dir, repository) = create_temp_repository("malformed", None);
        std::fs::create_dir_all(&temp_dir).unwrap();
        std::fs::write(repository.settings_path(), "{ not json").unwrap();

        assert!(repository.load_settings().is_err());

        std::fs::remove_dir_all(&temp_dir).ok();
    }
}
