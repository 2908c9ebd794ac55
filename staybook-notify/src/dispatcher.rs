use std::sync::Arc;

use tracing::{error, info};

use staybook_core::directory::HotelDirectory;
use staybook_core::notify::Notifier;
use staybook_shared::{BookingEvent, NotificationChannel, NotificationRequest};

/// Fans a booking-created event out to the customer and the hotel owner.
///
/// Best-effort fan-out: no step failure blocks another, and nothing here
/// ever negatively acknowledges the event. Delivery failures and owner
/// lookup failures are logged and swallowed so the consumer always moves on.
pub struct NotificationDispatcher {
    notifier: Arc<dyn Notifier>,
    hotels: Arc<dyn HotelDirectory>,
}

impl NotificationDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>, hotels: Arc<dyn HotelDirectory>) -> Self {
        Self { notifier, hotels }
    }

    pub async fn process_event(&self, event: &BookingEvent) {
        info!(booking_id = %event.booking_id, "processing booking event");

        let customer = NotificationRequest {
            channel: NotificationChannel::Email,
            recipient: event.user_id.to_string(),
            subject: Some("Your booking is confirmed".to_string()),
            message: customer_message(event),
        };
        if let Err(e) = self.notifier.send(&customer).await {
            error!(booking_id = %event.booking_id, error = %e, "failed to notify customer");
        }

        let owner_id = match self.hotels.owner_id(event.hotel_id).await {
            Ok(id) => id,
            Err(e) => {
                // Owner notification is skipped, the event still completes.
                error!(hotel_id = %event.hotel_id, error = %e, "failed to resolve hotel owner");
                return;
            }
        };

        let owner = NotificationRequest {
            channel: NotificationChannel::Email,
            recipient: owner_id.to_string(),
            subject: Some("New booking at your hotel".to_string()),
            message: owner_message(event),
        };
        if let Err(e) = self.notifier.send(&owner).await {
            error!(booking_id = %event.booking_id, error = %e, "failed to notify hotel owner");
        }
    }
}

fn customer_message(event: &BookingEvent) -> String {
    format!(
        "Your booking is confirmed!\n\n\
         Booking ID: {}\n\
         Hotel: {}\n\
         Total: {:.2}\n\
         Check-in: {}\n\
         Check-out: {}\n\n\
         Thank you for choosing our service!",
        event.booking_id,
        event.hotel_id,
        event.total_price,
        event.check_in_date.format("%Y-%m-%d"),
        event.check_out_date.format("%Y-%m-%d"),
    )
}

fn owner_message(event: &BookingEvent) -> String {
    format!(
        "New booking at your hotel!\n\n\
         Booking ID: {}\n\
         Guest: {}\n\
         Hotel: {}\n\
         Total: {:.2}\n\
         Check-in: {}\n\
         Check-out: {}",
        event.booking_id,
        event.user_id,
        event.hotel_id,
        event.total_price,
        event.check_in_date.format("%Y-%m-%d"),
        event.check_out_date.format("%Y-%m-%d"),
    )
}
