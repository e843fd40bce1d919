use std::sync::Arc;

use crate::core::interfaces::adapters::{ClipboardService, SettingsRepository, TextFormattingService};
use crate::core::models::{FormattingError, FormattingRequest, ImagePayload, RequestState};
use crate::global_constants;

#[derive(Clone)]
pub enum FormatMessage {
    SelectImage(ImagePayload),
    UpdateTemplate(String),
    Submit,
    CopyResult,
}

impl std::fmt::Debug for FormatMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatMessage::SelectImage(image) => write!(f, "SelectImage({})", image.mime_type),
            FormatMessage::UpdateTemplate(_) => write!(f, "UpdateTemplate"),
            FormatMessage::Submit => write!(f, "Submit"),
            FormatMessage::CopyResult => write!(f, "CopyResult"),
        }
    }
}

pub struct FormatOrchestrator {
    formatting_service: Arc<dyn TextFormattingService>,
    settings_repository: Arc<dyn SettingsRepository>,
    clipboard_service: Arc<dyn ClipboardService>,
    selected_image: Option<ImagePayload>,
    template_text: String,
    formatted_text: String,
    request_state: RequestState,
    last_error: Option<FormattingError>,
    clipboard_error: Option<String>,
    status: String,
}

impl FormatOrchestrator {
    pub fn build(
        formatting_service: Arc<dyn TextFormattingService>,
        settings_repository: Arc<dyn SettingsRepository>,
        clipboard_service: Arc<dyn ClipboardService>,
    ) -> Self {
        Self {
            formatting_service,
            settings_repository,
            clipboard_service,
            selected_image: None,
            template_text: String::new(),
            formatted_text: String::new(),
            request_state: RequestState::Idle,
            last_error: None,
            clipboard_error: None,
            status: global_constants::USER_MESSAGE_READY.to_string(),
        }
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn formatted_text(&self) -> &str {
        &self.formatted_text
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request_state
    }

    pub fn last_error(&self) -> Option<&FormattingError> {
        self.last_error.as_ref()
    }

    pub fn clipboard_error(&self) -> Option<&str> {
        self.clipboard_error.as_deref()
    }

    pub async fn update(&mut self, message: FormatMessage) {
        log::info!("[ORCHESTRATOR] Received message: {:?}", message);

        match message {
            FormatMessage::SelectImage(image) => self.handle_select_image(image),
            FormatMessage::UpdateTemplate(template_text) => self.template_text = template_text,
            FormatMessage::Submit => self.handle_submit().await,
            FormatMessage::CopyResult => self.handle_copy_result(),
        }
    }

    fn handle_select_image(&mut self, image: ImagePayload) {
        log::debug!(
            "[ORCHESTRATOR] Selected {} image ({} bytes)",
            image.mime_type,
            image.bytes.len()
        );
        self.selected_image = Some(image);
    }

    async fn handle_submit(&mut self) {
        let Some(image) = self.selected_image.clone() else {
            self.status = global_constants::USER_MESSAGE_NO_IMAGE.to_string();
            return;
        };

        if self.template_text.trim().is_empty() {
            self.status = global_constants::USER_MESSAGE_NO_TEMPLATE.to_string();
            return;
        }

        let credential = match self.settings_repository.load_api_key() {
            Ok(credential) => credential,
            Err(error) => {
                log::warn!("[ORCHESTRATOR] Could not read stored API key: {:#}", error);
                None
            }
        };

        let request = FormattingRequest::new(image, self.template_text.clone());

        self.request_state = RequestState::InFlight;
        self.formatted_text.clear();
        self.last_error = None;
        self.status = global_constants::USER_MESSAGE_PROCESSING.to_string();

        let result = self
            .formatting_service
            .extract_and_format(&request, credential.as_deref())
            .await;

        match result {
            Ok(formatted_text) => {
                self.formatted_text = formatted_text;
                self.last_error = None;
                self.request_state = RequestState::Succeeded;
                self.status = "Text extracted and formatted".to_string();
            }
            Err(error) => {
                log::error!("[ORCHESTRATOR] Formatting failed: {}", error);
                self.status = match error {
                    FormattingError::MissingCredential => {
                        global_constants::USER_MESSAGE_MISSING_KEY.to_string()
                    }
                    ref other => other.to_string(),
                };
                self.request_state = RequestState::Failed(error.to_string());
                self.last_error = Some(error);
            }
        }
    }

    fn handle_copy_result(&mut self) {
        self.clipboard_error = None;

        if self.formatted_text.is_empty() {
            self.status = "Nothing to copy yet".to_string();
            return;
        }

        match self.clipboard_service.copy_text(&self.formatted_text) {
            Ok(()) => self.status = global_constants::USER_MESSAGE_COPIED.to_string(),
            Err(error) => {
                log::error!("[ORCHESTRATOR] Clipboard copy failed: {:#}", error);
                self.status = format!("{}", error);
                self.clipboard_error = Some(format!("{:#}", error));
            }
        }
    }
}
