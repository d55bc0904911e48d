//! Trait abstraction for webhook delivery to enable mocking in tests

use async_trait::async_trait;

use super::client::WebhookError;

/// Blog content parameters collected by the Content form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogContentRequest {
    pub blog_title: String,
    pub seo_keywords: String,
    pub content_preference: String,
}

/// Voice configuration collected by the Voice form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceConfigRequest {
    pub voice_type: String,
    pub brand_voice: String,
    pub content_structure: String,
}

/// Trait for webhook delivery operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookDispatch: Send + Sync {
    /// Deliver a blog content request to its webhook
    async fn submit_blog_content(&self, request: BlogContentRequest) -> Result<(), WebhookError>;

    /// Deliver a voice configuration to its webhook
    async fn submit_voice_config(&self, request: VoiceConfigRequest) -> Result<(), WebhookError>;
}
