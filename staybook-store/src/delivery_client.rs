use std::time::Duration;

use async_trait::async_trait;

use staybook_core::notify::Notifier;
use staybook_shared::NotificationRequest;

/// HTTP client for the delivery service, which owns the actual channel
/// backends (email, SMS, Telegram).
pub struct DeliveryApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl DeliveryApiClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Notifier for DeliveryApiClient {
    async fn send(
        &self,
        request: &NotificationRequest,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/api/notifications/send", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            return Err(format!("delivery service returned status {}", response.status()).into());
        }

        Ok(())
    }
}
