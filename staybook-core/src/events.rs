use async_trait::async_trait;

use staybook_shared::BookingEvent;

/// Durable event-log seam for booking-created facts.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        event: &BookingEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
