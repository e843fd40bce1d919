use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<TransportResponse>;
}
