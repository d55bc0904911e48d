//! Webhook client for the content automation endpoints

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Serialize;

use super::traits::{BlogContentRequest, VoiceConfigRequest, WebhookDispatch};
use crate::config;

/// Failure delivering a request to a webhook endpoint. Callers surface both
/// variants as the same generic failure; the variant only reaches the log.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The request never completed (connection, TLS, protocol fault)
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status
    #[error("webhook returned status {0}")]
    Status(StatusCode),
}

/// Client end of the two fixed webhook endpoints
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http_client: Client,
    blog_content_url: String,
    voice_config_url: String,
}

impl WebhookClient {
    pub fn new() -> Self {
        Self::with_endpoints(
            config::BLOG_CONTENT_WEBHOOK_URL.to_string(),
            config::VOICE_CONFIG_WEBHOOK_URL.to_string(),
        )
    }

    /// Client against explicit endpoints (tests point this at a mock server)
    pub fn with_endpoints(blog_content_url: String, voice_config_url: String) -> Self {
        Self {
            http_client: Client::new(),
            blog_content_url,
            voice_config_url,
        }
    }

    async fn post_json<T: Serialize + Sync>(&self, url: &str, body: &T) -> Result<(), WebhookError> {
        let response = self.http_client.post(url).json(body).send().await?;
        if !response.status().is_success() {
            return Err(WebhookError::Status(response.status()));
        }
        Ok(())
    }
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebhookDispatch for WebhookClient {
    async fn submit_blog_content(&self, request: BlogContentRequest) -> Result<(), WebhookError> {
        let payload = BlogContentPayload {
            blog_title: &request.blog_title,
            seo_keywords: &request.seo_keywords,
            content_preference: &request.content_preference,
            timestamp: Utc::now(),
        };
        self.post_json(&self.blog_content_url, &payload).await
    }

    async fn submit_voice_config(&self, request: VoiceConfigRequest) -> Result<(), WebhookError> {
        let payload = VoiceConfigPayload {
            voice_type: &request.voice_type,
            brand_voice: &request.brand_voice,
            content_structure: &request.content_structure,
        };
        self.post_json(&self.voice_config_url, &payload).await
    }
}

// The timestamp is stamped at dispatch, not carried in form state.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlogContentPayload<'a> {
    blog_title: &'a str,
    seo_keywords: &'a str,
    content_preference: &'a str,
    timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct VoiceConfigPayload<'a> {
    voice_type: &'a str,
    brand_voice: &'a str,
    content_structure: &'a str,
}
