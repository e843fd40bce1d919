use anyhow::Result;

use crate::core::models::UserSettings;

pub trait SettingsRepository: Send + Sync {
    fn load_settings(&self) -> Result<UserSettings>;
    fn save_settings(&self, settings: &UserSettings) -> Result<()>;

    fn load_api_key(&self) -> Result<Option<String>> {
        Ok(self.load_settings()?.resolve_api_key(None))
    }

    fn save_api_key(&self, api_key: &str) -> Result<()> {
        let trimmed_key = api_key.trim();
        if trimmed_key.is_empty() {
            anyhow::bail!("API key must not be empty");
        }

        let mut settings = self.load_settings()?;
        settings.api_key = Some(trimmed_key.to_string());
        self.save_settings(&settings)
    }

    fn clear_api_key(&self) -> Result<()> {
        let mut settings = self.load_settings()?;
        settings.api_key = None;
        self.save_settings(&settings)
    }
}
