use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::core::interfaces::ports::{GenerationTransport, TransportResponse};

pub struct ReqwestGenerationTransport {
    client: reqwest::Client,
}

impl ReqwestGenerationTransport {
    pub fn build() -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

#[async_trait]
impl GenerationTransport for ReqwestGenerationTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<TransportResponse> {
        log::debug!("[HTTP] POST {}", redact_query(url));

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Request to inference service failed")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read inference service response")?;

        log::debug!("[HTTP] Response status {} ({} bytes)", status, body.len());

        Ok(TransportResponse { status, body })
    }
}

fn redact_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
