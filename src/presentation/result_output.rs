use serde::Serialize;

use crate::core::models::FormattingError;

#[derive(Debug, Serialize)]
struct SuccessOutput<'a> {
    ok: bool,
    formatted_text: &'a str,
}

#[derive(Debug, Serialize)]
struct ErrorDetail<'a> {
    kind: &'a str,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorOutput<'a> {
    ok: bool,
    error: ErrorDetail<'a>,
}

#[derive(Debug, Serialize)]
struct StatusOutput<'a> {
    ok: bool,
    message: &'a str,
}

pub fn render_formatted_text(json: bool, formatted_text: &str) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&SuccessOutput {
            ok: true,
            formatted_text,
        })?);
    }

    Ok(formatted_text.to_string())
}

pub fn render_formatting_error(
    json: bool,
    error: &FormattingError,
    user_message: &str,
) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&ErrorOutput {
            ok: false,
            error: ErrorDetail {
                kind: error.kind(),
                message: user_message.to_string(),
            },
        })?);
    }

    Ok(format!("error: {}", user_message))
}

pub fn render_app_error(json: bool, error: &anyhow::Error) -> anyhow::Result<String> {
    let message = format!("{:#}", error);

    if json {
        return Ok(serde_json::to_string_pretty(&ErrorOutput {
            ok: false,
            error: ErrorDetail {
                kind: "app_error",
                message,
            },
        })?);
    }

    Ok(format!("error: {}", message))
}

pub fn render_status(json: bool, message: &str) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&StatusOutput { ok: true, message })?);
    }

    Ok(message.to_string())
}
