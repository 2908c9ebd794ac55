use std::sync::Arc;

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::message::Message;
use tracing::{error, info};

use staybook_notify::NotificationDispatcher;
use staybook_shared::BookingEvent;
use staybook_store::Metrics;

/// Consumes booking-created events and hands them to the dispatcher, one
/// message at a time. Auto-commit keeps the transport at-least-once while
/// the handler never negatively acknowledges: decode failures and delivery
/// failures are logged and the loop moves to the next message.
pub async fn start_notification_worker(
    brokers: String,
    group_id: String,
    topic: String,
    dispatcher: Arc<NotificationDispatcher>,
    metrics: Arc<Metrics>,
) {
    let consumer: StreamConsumer = ClientConfig::new()
        .set("bootstrap.servers", &brokers)
        .set("group.id", &group_id)
        .set("enable.auto.commit", "true")
        .set("auto.offset.reset", "earliest")
        .create()
        .expect("Consumer creation failed");

    consumer.subscribe(&[topic.as_str()]).expect("Can't subscribe");

    info!("Notification worker started, listening for booking events...");

    loop {
        match consumer.recv().await {
            Err(e) => error!("Kafka error: {}", e),
            Ok(m) => {
                if let Some(payload) = m.payload_view::<str>() {
                    match payload {
                        Ok(json) => {
                            metrics.events_consumed.inc();
                            match serde_json::from_str::<BookingEvent>(json) {
                                Ok(event) => {
                                    info!("Processing booking event: {}", event.booking_id);
                                    dispatcher.process_event(&event).await;
                                }
                                Err(e) => error!("Error decoding booking event: {}", e),
                            }
                        }
                        Err(e) => error!("Error reading payload: {}", e),
                    }
                }
            }
        }
    }
}
