use async_trait::async_trait;
use uuid::Uuid;

/// Hotel directory collaborator. Both calls are synchronous network round
/// trips with no retry or caching; transient failures propagate as hard
/// errors.
#[async_trait]
pub trait HotelDirectory: Send + Sync {
    /// Current nightly price for a room. Resolved fresh on every booking.
    async fn room_price(
        &self,
        hotel_id: Uuid,
        room_id: Uuid,
    ) -> Result<f64, Box<dyn std::error::Error + Send + Sync>>;

    /// Identity of the hotel's owner, for owner-facing notifications.
    async fn owner_id(
        &self,
        hotel_id: Uuid,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;
}
