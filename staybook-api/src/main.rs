use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use staybook_api::{app, worker, AppState};
use staybook_booking::BookingOrchestrator;
use staybook_core::payment::PaymentGateway;
use staybook_notify::NotificationDispatcher;
use staybook_payment::{HttpWebhookSink, PaymentService};
use staybook_store::{
    DbClient, DeliveryApiClient, EventProducer, HotelApiClient, KafkaBookingEvents, Metrics,
    PaymentApiClient, PostgresBookingStore,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "staybook_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = staybook_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Staybook API on port {}", config.server.port);

    let metrics = Arc::new(Metrics::new().expect("Failed to build metrics registry"));

    // Postgres connection
    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    let store = Arc::new(PostgresBookingStore::new(db.pool.clone()));

    // Hotel service client, used for both pricing and owner lookups
    let hotels = Arc::new(
        HotelApiClient::new(config.services.hotel_url.clone())
            .expect("Failed to build hotel client"),
    );

    // Kafka connection
    let producer = EventProducer::new(&config.kafka.brokers, metrics.clone())
        .expect("Failed to create Kafka producer");
    let publisher = Arc::new(KafkaBookingEvents::new(
        producer,
        config.kafka.booking_topic.clone(),
    ));

    // Payment gateway is optional: without it bookings confirm unpaid.
    let gateway: Option<Arc<dyn PaymentGateway>> = match &config.services.payment_url {
        Some(url) => Some(Arc::new(
            PaymentApiClient::new(url.clone()).expect("Failed to build payment client"),
        )),
        None => None,
    };

    let orchestrator = Arc::new(BookingOrchestrator::new(
        store,
        hotels.clone(),
        publisher,
        gateway,
    ));

    let sink = Arc::new(
        HttpWebhookSink::new(config.payment.webhook_url.clone())
            .expect("Failed to build webhook sink"),
    );
    let payments = Arc::new(PaymentService::new(
        sink,
        Duration::from_secs(config.payment.settle_after_secs),
    ));

    let notifier = Arc::new(
        DeliveryApiClient::new(config.services.delivery_url.clone())
            .expect("Failed to build delivery client"),
    );
    let dispatcher = Arc::new(NotificationDispatcher::new(notifier, hotels));

    tokio::spawn(worker::start_notification_worker(
        config.kafka.brokers.clone(),
        config.kafka.consumer_group.clone(),
        config.kafka.booking_topic.clone(),
        dispatcher,
        metrics.clone(),
    ));

    let app_state = AppState {
        orchestrator,
        payments,
        metrics,
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
