use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::core::interfaces::adapters::TextFormattingService;
use crate::core::interfaces::ports::{GenerationTransport, TransportResponse};
use crate::core::models::{FormattingError, FormattingRequest, UserSettings};
use crate::global_constants;

#[derive(Debug, Serialize)]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Text { text: String },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

pub struct GeminiTextFormattingService {
    transport: Arc<dyn GenerationTransport>,
    endpoint_url: String,
    generation_config: GenerationConfig,
    preserve_image_mime_type: bool,
    request_timeout: Option<Duration>,
}

impl GeminiTextFormattingService {
    pub fn build(transport: Arc<dyn GenerationTransport>, settings: &UserSettings) -> Self {
        let endpoint_url = format!(
            "{}/{}:generateContent",
            settings.api_base_url.trim_end_matches('/'),
            settings.model
        );

        log::info!("[GEMINI] Using endpoint {}", endpoint_url);

        Self {
            transport,
            endpoint_url,
            generation_config: GenerationConfig {
                temperature: settings.temperature,
                max_output_tokens: settings.max_output_tokens,
            },
            preserve_image_mime_type: settings.preserve_image_mime_type,
            request_timeout: settings.request_timeout(),
        }
    }

    fn construct_request_url(&self, api_key: &str) -> String {
        format!("{}?key={}", self.endpoint_url, urlencoding::encode(api_key))
    }

    fn construct_request_body(
        &self,
        request: &FormattingRequest,
    ) -> Result<serde_json::Value, FormattingError> {
        let mime_type = if self.preserve_image_mime_type {
            request.image.mime_type.as_str()
        } else {
            global_constants::LEGACY_IMAGE_MIME_TYPE
        };

        let body = GenerateContentBody {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: request.build_instruction_prompt(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type,
                            data: request.image.to_base64(),
                        },
                    },
                ],
            }],
            generation_config: self.generation_config,
        };

        serde_json::to_value(&body).map_err(|error| {
            FormattingError::TransportFailure(format!("Failed to encode request body: {}", error))
        })
    }

    async fn send_once(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, FormattingError> {
        let send = self.transport.post_json(url, body);

        let outcome = match self.request_timeout {
            Some(deadline) => tokio::time::timeout(deadline, send)
                .await
                .map_err(|_| FormattingError::Timeout(deadline))?,
            None => send.await,
        };

        outcome.map_err(|error| FormattingError::TransportFailure(format!("{:#}", error)))
    }

    fn extract_remote_error(response: &TransportResponse) -> FormattingError {
        let message = serde_json::from_str::<serde_json::Value>(&response.body)
            .ok()
            .and_then(|json| {
                json["error"]["message"]
                    .as_str()
                    .filter(|message| !message.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| global_constants::GENERIC_REMOTE_ERROR_MESSAGE.to_string());

        FormattingError::RemoteError {
            status: response.status,
            message,
        }
    }

    fn extract_generated_text(response: &TransportResponse) -> Result<String, FormattingError> {
        let json: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|_| FormattingError::EmptyResult)?;

        json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .ok_or(FormattingError::EmptyResult)
    }
}

#[async_trait]
impl TextFormattingService for GeminiTextFormattingService {
    async fn extract_and_format(
        &self,
        request: &FormattingRequest,
        credential: Option<&str>,
    ) -> Result<String, FormattingError> {
        let api_key = credential
            .filter(|key| !key.trim().is_empty())
            .ok_or(FormattingError::MissingCredential)?;

        log::info!("[GEMINI] Sending extraction request");
        log::debug!(
            "[GEMINI] Image: {} ({} bytes), template: {} chars",
            request.image.mime_type,
            request.image.bytes.len(),
            request.template_text.chars().count()
        );

        let body = self.construct_request_body(request)?;
        let response = self
            .send_once(&self.construct_request_url(api_key), &body)
            .await?;

        if !response.is_success() {
            let error = Self::extract_remote_error(&response);
            log::warn!("[GEMINI] Request failed with status {}: {}", response.status, error);
            return Err(error);
        }

        let formatted_text = Self::extract_generated_text(&response)?;
        log::info!(
            "[GEMINI] Received {} characters of formatted text",
            formatted_text.chars().count()
        );

        Ok(formatted_text)
    }
}
