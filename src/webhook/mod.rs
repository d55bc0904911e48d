//! Webhook delivery module

mod client;
mod traits;

pub use client::{WebhookClient, WebhookError};
pub use traits::{BlogContentRequest, VoiceConfigRequest, WebhookDispatch};

#[cfg(test)]
pub use traits::MockWebhookDispatch;
