use async_trait::async_trait;
use uuid::Uuid;

use staybook_shared::{Booking, BookingStatus, PaymentStatus};

/// Repository trait for booking persistence. Each call is a single round
/// trip; list results are ordered by creation time, newest first.
#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn create(
        &self,
        booking: &Booking,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_by_hotel(
        &self,
        hotel_id: Uuid,
    ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>>;

    async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn update_payment_status(
        &self,
        id: Uuid,
        status: PaymentStatus,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
