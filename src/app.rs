use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::adapters::{
    ArboardClipboardService, GeminiTextFormattingService, JsonFileSettingsRepository,
    ReqwestGenerationTransport,
};
use crate::cli::{Cli, Commands, FormatArgs, KeyCommands};
use crate::core::interfaces::adapters::SettingsRepository;
use crate::core::models::{ImagePayload, RequestState};
use crate::core::orchestrators::{FormatMessage, FormatOrchestrator};
use crate::presentation::result_output;

pub struct FormatterApp {
    settings_repository: Arc<JsonFileSettingsRepository>,
    json: bool,
}

impl FormatterApp {
    pub fn build(json: bool) -> Result<Self> {
        log::info!("[APP] Initializing application");

        let settings_repository = Arc::new(JsonFileSettingsRepository::at_default_location()?);
        log::debug!(
            "[APP] Settings file: {:?}",
            settings_repository.settings_path()
        );

        Ok(Self {
            settings_repository,
            json,
        })
    }

    pub async fn run(&self, cli: Cli) -> Result<ExitCode> {
        match cli.command {
            Commands::Format(args) => self.run_format(args).await,
            Commands::Key { command } => {
                self.run_key_command(command)?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    async fn run_format(&self, args: FormatArgs) -> Result<ExitCode> {
        let mut settings = self
            .settings_repository
            .load_settings()
            .unwrap_or_else(|e| {
                log::warn!("[APP] Failed to load settings: {:#}, using defaults", e);
                Default::default()
            });

        if args.timeout.is_some() {
            settings.request_timeout_seconds = args.timeout;
        }
        if args.legacy_jpeg_mime {
            settings.preserve_image_mime_type = false;
        }

        let image = Self::read_image(&args).await?;
        let template_text = Self::read_template(&args).await?;

        let transport = Arc::new(ReqwestGenerationTransport::build()?);
        let formatting_service = Arc::new(GeminiTextFormattingService::build(transport, &settings));

        let mut orchestrator = FormatOrchestrator::build(
            formatting_service,
            Arc::clone(&self.settings_repository) as Arc<dyn SettingsRepository>,
            Arc::new(ArboardClipboardService),
        );

        orchestrator.update(FormatMessage::SelectImage(image)).await;
        orchestrator
            .update(FormatMessage::UpdateTemplate(template_text))
            .await;
        orchestrator.update(FormatMessage::Submit).await;

        match orchestrator.request_state() {
            RequestState::Succeeded => {}
            RequestState::Failed(reason) => {
                let Some(error) = orchestrator.last_error() else {
                    anyhow::bail!("{}", reason);
                };
                let rendered =
                    result_output::render_formatting_error(self.json, error, orchestrator.status())?;
                if self.json {
                    println!("{}", rendered);
                } else {
                    eprintln!("{}", rendered);
                }
                return Ok(ExitCode::FAILURE);
            }
            RequestState::Idle | RequestState::InFlight => {
                anyhow::bail!("{}", orchestrator.status());
            }
        }

        println!(
            "{}",
            result_output::render_formatted_text(self.json, orchestrator.formatted_text())?
        );

        if let Some(output_path) = &args.output {
            tokio::fs::write(output_path, orchestrator.formatted_text())
                .await
                .with_context(|| format!("Failed to write {:?}", output_path))?;
            log::info!("[APP] Wrote formatted text to {:?}", output_path);
        }

        if args.copy {
            orchestrator.update(FormatMessage::CopyResult).await;
            if let Some(clipboard_error) = orchestrator.clipboard_error() {
                anyhow::bail!("Failed to copy formatted text: {}", clipboard_error);
            }
            eprintln!("{}", orchestrator.status());
        }

        Ok(ExitCode::SUCCESS)
    }

    fn run_key_command(&self, command: KeyCommands) -> Result<()> {
        let message = match command {
            KeyCommands::Set { api_key } => {
                self.settings_repository.save_api_key(&api_key)?;
                "API key saved".to_string()
            }
            KeyCommands::Clear => {
                self.settings_repository.clear_api_key()?;
                "API key removed".to_string()
            }
            KeyCommands::Status => match self.settings_repository.load_api_key()? {
                Some(_) => "API key configured".to_string(),
                None => "API key not configured".to_string(),
            },
        };

        println!("{}", result_output::render_status(self.json, &message)?);
        Ok(())
    }

    async fn read_image(args: &FormatArgs) -> Result<ImagePayload> {
        let bytes = tokio::fs::read(&args.image)
            .await
            .with_context(|| format!("Failed to read image {:?}", args.image))?;

        if bytes.starts_with(b"data:") {
            let data_url = std::str::from_utf8(&bytes).context("Data URL is not valid UTF-8")?;
            return ImagePayload::from_data_url(data_url);
        }

        ImagePayload::from_bytes(bytes, Some(args.image.as_path()))
    }

    async fn read_template(args: &FormatArgs) -> Result<String> {
        match (&args.template, &args.template_file) {
            (Some(template), _) => Ok(template.clone()),
            (None, Some(template_path)) => tokio::fs::read_to_string(template_path)
                .await
                .with_context(|| format!("Failed to read template {:?}", template_path)),
            (None, None) => anyhow::bail!("A template is required"),
        }
    }
}
