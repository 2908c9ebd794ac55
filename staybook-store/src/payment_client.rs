use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::error;
use uuid::Uuid;

use staybook_core::payment::PaymentGateway;
use staybook_shared::{PaymentRequest, PaymentResponse};

/// HTTP client for the payment service. Acceptance only: a 202 means the
/// payment entered processing, the settlement outcome arrives via webhook.
pub struct PaymentApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PaymentApiClient {
    pub fn new(base_url: String) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl PaymentGateway for PaymentApiClient {
    async fn create_payment(
        &self,
        booking_id: Uuid,
        amount: f64,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let url = format!("{}/api/payments", self.base_url);
        let request = PaymentRequest {
            booking_id,
            amount,
            currency: Some("RUB".to_string()),
        };

        let response = self.client.post(&url).json(&request).send().await.map_err(|e| {
            error!(booking_id = %booking_id, error = %e, "failed to create payment");
            e
        })?;

        if response.status() != StatusCode::ACCEPTED {
            return Err(format!("payment service returned status {}", response.status()).into());
        }

        let accepted: PaymentResponse = response.json().await?;
        Ok(accepted.payment_id)
    }
}
