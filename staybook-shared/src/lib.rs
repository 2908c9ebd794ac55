pub mod models;

pub use models::booking::{Booking, BookingStatus, NewBooking, PaymentStatus};
pub use models::events::BookingEvent;
pub use models::notification::{NotificationChannel, NotificationRequest};
pub use models::payment::{PaymentRequest, PaymentResponse, PaymentWebhook, SettlementStatus};
