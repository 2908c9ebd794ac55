pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod delivery_client;
pub mod events;
pub mod hotel_client;
pub mod metrics;
pub mod payment_client;

pub use booking_repo::PostgresBookingStore;
pub use database::DbClient;
pub use delivery_client::DeliveryApiClient;
pub use events::{EventProducer, KafkaBookingEvents};
pub use hotel_client::HotelApiClient;
pub use metrics::Metrics;
pub use payment_client::PaymentApiClient;
