use async_trait::async_trait;
use uuid::Uuid;

/// Payment gateway collaborator. Acceptance is synchronous only: a
/// successful call means the payment entered processing, not that it will
/// settle. The outcome arrives later via webhook.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment(
        &self,
        booking_id: Uuid,
        amount: f64,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;
}
