use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use staybook_shared::PaymentWebhook;

/// Delivery seam for settlement outcomes, so the service can be exercised
/// without a live booking service on the other end.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn deliver(
        &self,
        webhook: &PaymentWebhook,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// POSTs the webhook to the booking service's callback endpoint. Any
/// non-2xx response counts as a delivery failure.
pub struct HttpWebhookSink {
    client: reqwest::Client,
    callback_url: String,
}

impl HttpWebhookSink {
    pub fn new(callback_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            callback_url,
        })
    }
}

#[async_trait]
impl WebhookSink for HttpWebhookSink {
    async fn deliver(
        &self,
        webhook: &PaymentWebhook,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let response = self
            .client
            .post(&self.callback_url)
            .json(webhook)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("webhook returned status {}", response.status()).into());
        }

        info!(
            payment_id = %webhook.payment_id,
            booking_id = %webhook.booking_id,
            status = %webhook.status,
            "payment webhook sent"
        );
        Ok(())
    }
}
