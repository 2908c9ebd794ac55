use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::booking::Booking;

pub const BOOKING_CREATED: &str = "booking.created";

/// Denormalized snapshot of a booking, published once per creation.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct BookingEvent {
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub hotel_id: Uuid,
    pub room_id: Uuid,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: DateTime<Utc>,
    pub total_price: f64,
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
}

impl BookingEvent {
    pub fn created(booking: &Booking) -> Self {
        Self {
            booking_id: booking.id,
            user_id: booking.user_id,
            hotel_id: booking.hotel_id,
            room_id: booking.room_id,
            check_in_date: booking.check_in_date,
            check_out_date: booking.check_out_date,
            total_price: booking.total_price,
            event_type: BOOKING_CREATED.to_string(),
            timestamp: Utc::now(),
        }
    }
}
