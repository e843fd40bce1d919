use anyhow::{Context, Result};

use crate::core::interfaces::adapters::ClipboardService;

pub struct ArboardClipboardService;

impl ClipboardService for ArboardClipboardService {
    fn copy_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to initialize clipboard")?;

        clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?;

        log::info!("[CLIPBOARD] Copied {} characters", text.chars().count());
        Ok(())
    }
}
