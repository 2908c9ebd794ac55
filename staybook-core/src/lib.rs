pub mod directory;
pub mod events;
pub mod notify;
pub mod payment;
pub mod repository;

use uuid::Uuid;

/// Error taxonomy for the booking workflow.
///
/// Validation errors are returned to the caller immediately and never
/// retried. Dependency errors surface the failing collaborator without any
/// compensating rollback of state persisted earlier in the sequence.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("check-in date must be before check-out date")]
    InvalidDateRange,

    #[error("invalid payment status: {0}")]
    InvalidPaymentStatus(String),

    #[error("booking not found: {0}")]
    NotFound(Uuid),

    #[error("failed to resolve room price: {0}")]
    PricingFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to persist booking: {0}")]
    StoreFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to create payment: {0}")]
    PaymentFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to publish booking event: {0}")]
    PublishFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl BookingError {
    /// True for errors caused by bad input rather than a failing dependency.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookingError::InvalidDateRange | BookingError::InvalidPaymentStatus(_)
        )
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
