use async_trait::async_trait;

use crate::core::models::{FormattingError, FormattingRequest};

#[async_trait]
pub trait TextFormattingService: Send + Sync {
    /// Performs one round trip; a missing credential fails before any network call.
    async fn extract_and_format(
        &self,
        request: &FormattingRequest,
        credential: Option<&str>,
    ) -> Result<String, FormattingError>;
}
