mod arboard_clipboard_service;
mod gemini_text_formatting_service;
mod json_file_settings_repository;
mod reqwest_generation_transport;

pub use arboard_clipboard_service::ArboardClipboardService;
pub use gemini_text_formatting_service::GeminiTextFormattingService;
pub use json_file_settings_repository::JsonFileSettingsRepository;
pub use reqwest_generation_transport::ReqwestGenerationTransport;
