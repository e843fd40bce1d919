mod clipboard_service;
mod settings_repository;
mod text_formatting_service;

pub use clipboard_service::ClipboardService;
pub use settings_repository::SettingsRepository;
pub use text_formatting_service::TextFormattingService;
