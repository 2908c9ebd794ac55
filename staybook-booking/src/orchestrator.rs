use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use staybook_core::directory::HotelDirectory;
use staybook_core::events::EventPublisher;
use staybook_core::payment::PaymentGateway;
use staybook_core::repository::BookingStore;
use staybook_core::{BookingError, BookingResult};
use staybook_shared::{Booking, BookingEvent, NewBooking, PaymentStatus};

/// Coordinates booking creation across the hotel directory, the booking
/// store, the payment gateway and the event log, and applies payment-status
/// callbacks afterwards.
///
/// The creation sequence is persist, then payment, then publish. The three
/// side effects are not transactional: a payment or publish failure leaves
/// the persisted booking in place and surfaces the error to the caller.
pub struct BookingOrchestrator {
    store: Arc<dyn BookingStore>,
    hotels: Arc<dyn HotelDirectory>,
    events: Arc<dyn EventPublisher>,
    payments: Option<Arc<dyn PaymentGateway>>,
}

impl BookingOrchestrator {
    pub fn new(
        store: Arc<dyn BookingStore>,
        hotels: Arc<dyn HotelDirectory>,
        events: Arc<dyn EventPublisher>,
        payments: Option<Arc<dyn PaymentGateway>>,
    ) -> Self {
        Self {
            store,
            hotels,
            events,
            payments,
        }
    }

    pub async fn create_booking(&self, request: NewBooking) -> BookingResult<Booking> {
        if request.check_in_date >= request.check_out_date {
            return Err(BookingError::InvalidDateRange);
        }

        let rate = self
            .hotels
            .room_price(request.hotel_id, request.room_id)
            .await
            .map_err(BookingError::PricingFailed)?;

        let total_price = rate * nights_between(&request) as f64;

        let booking = Booking::new(&request, total_price);

        self.store
            .create(&booking)
            .await
            .map_err(BookingError::StoreFailed)?;

        if let Some(gateway) = &self.payments {
            gateway
                .create_payment(booking.id, booking.total_price)
                .await
                .map_err(BookingError::PaymentFailed)?;
        }

        let event = BookingEvent::created(&booking);
        self.events
            .publish(&event)
            .await
            .map_err(BookingError::PublishFailed)?;

        info!(booking_id = %booking.id, total_price = booking.total_price, "booking created");

        Ok(booking)
    }

    pub async fn update_payment_status(&self, id: Uuid, status: &str) -> BookingResult<()> {
        let status = PaymentStatus::parse(status)
            .ok_or_else(|| BookingError::InvalidPaymentStatus(status.to_string()))?;

        self.store
            .update_payment_status(id, status)
            .await
            .map_err(BookingError::StoreFailed)?;

        info!(booking_id = %id, status = %status, "payment status updated");
        Ok(())
    }

    pub async fn booking(&self, id: Uuid) -> BookingResult<Booking> {
        self.store
            .by_id(id)
            .await
            .map_err(BookingError::StoreFailed)?
            .ok_or(BookingError::NotFound(id))
    }

    pub async fn bookings_by_user(&self, user_id: Uuid) -> BookingResult<Vec<Booking>> {
        self.store
            .list_by_user(user_id)
            .await
            .map_err(BookingError::StoreFailed)
    }

    pub async fn bookings_by_hotel(&self, hotel_id: Uuid) -> BookingResult<Vec<Booking>> {
        self.store
            .list_by_hotel(hotel_id)
            .await
            .map_err(BookingError::StoreFailed)
    }
}

/// Whole 24-hour periods between check-in and check-out, truncated toward
/// zero with a floor of one night. A sub-24h stay is charged as one night.
fn nights_between(request: &NewBooking) -> i64 {
    let hours = (request.check_out_date - request.check_in_date).num_hours();
    (hours / 24).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use staybook_shared::BookingStatus;
    use std::sync::Mutex;

    struct MemoryStore {
        bookings: Mutex<Vec<Booking>>,
        fail_create: bool,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                bookings: Mutex::new(Vec::new()),
                fail_create: false,
            }
        }

        fn failing() -> Self {
            Self {
                bookings: Mutex::new(Vec::new()),
                fail_create: true,
            }
        }

        fn len(&self) -> usize {
            self.bookings.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl BookingStore for MemoryStore {
        async fn create(
            &self,
            booking: &Booking,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            if self.fail_create {
                return Err("insert failed".into());
            }
            self.bookings.lock().unwrap().push(booking.clone());
            Ok(())
        }

        async fn by_id(
            &self,
            id: Uuid,
        ) -> Result<Option<Booking>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .find(|b| b.id == id)
                .cloned())
        }

        async fn list_by_user(
            &self,
            user_id: Uuid,
        ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn list_by_hotel(
            &self,
            hotel_id: Uuid,
        ) -> Result<Vec<Booking>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(self
                .bookings
                .lock()
                .unwrap()
                .iter()
                .filter(|b| b.hotel_id == hotel_id)
                .cloned()
                .collect())
        }

        async fn update_status(
            &self,
            id: Uuid,
            status: BookingStatus,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            for b in self.bookings.lock().unwrap().iter_mut() {
                if b.id == id {
                    b.status = status;
                }
            }
            Ok(())
        }

        async fn update_payment_status(
            &self,
            id: Uuid,
            status: PaymentStatus,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            for b in self.bookings.lock().unwrap().iter_mut() {
                if b.id == id {
                    b.payment_status = status;
                }
            }
            Ok(())
        }
    }

    struct FixedRateDirectory {
        rate: f64,
        fail: bool,
    }

    #[async_trait]
    impl HotelDirectory for FixedRateDirectory {
        async fn room_price(
            &self,
            _hotel_id: Uuid,
            _room_id: Uuid,
        ) -> Result<f64, Box<dyn std::error::Error + Send + Sync>> {
            if self.fail {
                return Err("room not found".into());
            }
            Ok(self.rate)
        }

        async fn owner_id(
            &self,
            _hotel_id: Uuid,
        ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Uuid::new_v4())
        }
    }

    struct RecordingPublisher {
        events: Mutex<Vec<BookingEvent>>,
    }

    impl RecordingPublisher {
        fn new() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl EventPublisher for RecordingPublisher {
        async fn publish(
            &self,
            event: &BookingEvent,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    struct RecordingGateway {
        calls: Mutex<Vec<(Uuid, f64)>>,
        fail: bool,
    }

    #[async_trait]
    impl PaymentGateway for RecordingGateway {
        async fn create_payment(
            &self,
            booking_id: Uuid,
            amount: f64,
        ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
            if self.fail {
                return Err("payment service unavailable".into());
            }
            self.calls.lock().unwrap().push((booking_id, amount));
            Ok(Uuid::new_v4())
        }
    }

    fn request_for_nights(days: i64) -> NewBooking {
        let check_in = Utc.with_ymd_and_hms(2025, 6, 1, 14, 0, 0).unwrap();
        NewBooking {
            user_id: Uuid::new_v4(),
            hotel_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            check_in_date: check_in,
            check_out_date: check_in + Duration::days(days),
        }
    }

    fn orchestrator(
        store: Arc<MemoryStore>,
        rate: f64,
        publisher: Arc<RecordingPublisher>,
        gateway: Option<Arc<RecordingGateway>>,
    ) -> BookingOrchestrator {
        BookingOrchestrator::new(
            store,
            Arc::new(FixedRateDirectory { rate, fail: false }),
            publisher,
            gateway.map(|g| g as Arc<dyn PaymentGateway>),
        )
    }

    #[tokio::test]
    async fn test_two_night_stay_is_priced_per_night() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store.clone(), 5000.0, publisher.clone(), None);

        let booking = orch.create_booking(request_for_nights(2)).await.unwrap();

        assert_eq!(booking.total_price, 10000.0);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(store.len(), 1);

        let events = publisher.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].booking_id, booking.id);
        assert_eq!(events[0].event_type, "booking.created");
        assert_eq!(events[0].total_price, 10000.0);
    }

    #[tokio::test]
    async fn test_sub_day_stay_charges_one_night() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store.clone(), 3200.0, publisher, None);

        let check_in = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
        let mut request = request_for_nights(1);
        request.check_in_date = check_in;
        request.check_out_date = check_in + Duration::hours(14);

        let booking = orch.create_booking(request).await.unwrap();
        assert_eq!(booking.total_price, 3200.0);
    }

    #[tokio::test]
    async fn test_invalid_date_range_writes_nothing() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store.clone(), 5000.0, publisher.clone(), None);

        let mut request = request_for_nights(2);
        std::mem::swap(&mut request.check_in_date, &mut request.check_out_date);

        let err = orch.create_booking(request).await.unwrap_err();
        assert!(matches!(err, BookingError::InvalidDateRange));
        assert_eq!(store.len(), 0);
        assert!(publisher.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_equal_dates_are_rejected() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store.clone(), 5000.0, publisher, None);

        let mut request = request_for_nights(2);
        request.check_out_date = request.check_in_date;

        let err = orch.create_booking(request).await.unwrap_err();
        assert!(matches!(err, BookingError::InvalidDateRange));
        assert_eq!(store.len(), 0);
    }

    #[tokio::test]
    async fn test_pricing_failure_aborts_before_any_write() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = BookingOrchestrator::new(
            store.clone(),
            Arc::new(FixedRateDirectory {
                rate: 0.0,
                fail: true,
            }),
            publisher.clone(),
            None,
        );

        let err = orch.create_booking(request_for_nights(2)).await.unwrap_err();
        assert!(matches!(err, BookingError::PricingFailed(_)));
        assert_eq!(store.len(), 0);
        assert!(publisher.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_publishes_nothing() {
        let store = Arc::new(MemoryStore::failing());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store, 5000.0, publisher.clone(), None);

        let err = orch.create_booking(request_for_nights(2)).await.unwrap_err();
        assert!(matches!(err, BookingError::StoreFailed(_)));
        assert!(publisher.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_payment_is_requested_for_persisted_booking() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let gateway = Arc::new(RecordingGateway {
            calls: Mutex::new(Vec::new()),
            fail: false,
        });
        let orch = orchestrator(store, 5000.0, publisher, Some(gateway.clone()));

        let booking = orch.create_booking(request_for_nights(3)).await.unwrap();

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (booking.id, 15000.0));
    }

    #[tokio::test]
    async fn test_payment_failure_keeps_booking_but_surfaces_error() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let gateway = Arc::new(RecordingGateway {
            calls: Mutex::new(Vec::new()),
            fail: true,
        });
        let orch = orchestrator(store.clone(), 5000.0, publisher.clone(), Some(gateway));

        let err = orch.create_booking(request_for_nights(2)).await.unwrap_err();
        assert!(matches!(err, BookingError::PaymentFailed(_)));
        // Intentional asymmetry: the booking record stays.
        assert_eq!(store.len(), 1);
        // The event is only published after a successful payment call.
        assert!(publisher.events.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_without_gateway_booking_still_confirms() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store.clone(), 5000.0, publisher.clone(), None);

        let booking = orch.create_booking(request_for_nights(1)).await.unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(publisher.events.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_payment_status_accepts_known_values_case_insensitively() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store.clone(), 5000.0, publisher, None);

        let booking = orch.create_booking(request_for_nights(1)).await.unwrap();

        orch.update_payment_status(booking.id, "PAID").await.unwrap();
        assert_eq!(
            orch.booking(booking.id).await.unwrap().payment_status,
            PaymentStatus::Paid
        );

        orch.update_payment_status(booking.id, "Refunded").await.unwrap();
        assert_eq!(
            orch.booking(booking.id).await.unwrap().payment_status,
            PaymentStatus::Refunded
        );
    }

    #[tokio::test]
    async fn test_update_payment_status_rejects_unknown_value() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store.clone(), 5000.0, publisher, None);

        let booking = orch.create_booking(request_for_nights(1)).await.unwrap();

        let err = orch
            .update_payment_status(booking.id, "charged_back")
            .await
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidPaymentStatus(_)));
        assert_eq!(
            orch.booking(booking.id).await.unwrap().payment_status,
            PaymentStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_missing_booking_reads_as_not_found() {
        let store = Arc::new(MemoryStore::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let orch = orchestrator(store, 5000.0, publisher, None);

        let err = orch.booking(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, BookingError::NotFound(_)));
    }
}
