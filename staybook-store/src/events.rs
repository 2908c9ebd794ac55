use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use async_trait::async_trait;
use staybook_core::events::EventPublisher;
use staybook_shared::BookingEvent;

use crate::metrics::Metrics;

#[derive(Clone)]
pub struct EventProducer {
    producer: FutureProducer,
    metrics: Arc<Metrics>,
}

impl EventProducer {
    pub fn new(brokers: &str, metrics: Arc<Metrics>) -> Result<Self, rdkafka::error::KafkaError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self { producer, metrics })
    }

    pub async fn publish(
        &self,
        topic: &str,
        key: &str,
        payload: &str,
    ) -> Result<(), rdkafka::error::KafkaError> {
        let record = FutureRecord::to(topic).key(key).payload(payload);

        match self.producer.send(record, Timeout::After(Duration::from_secs(0))).await {
            Ok(delivery) => {
                self.metrics.events_produced.inc();
                info!(
                    "Sent message to {}/{}: partition {} offset {}",
                    topic, key, delivery.partition, delivery.offset
                );
                Ok(())
            }
            Err((e, _msg)) => {
                error!("Failed to send message to {}: {}", topic, e);
                Err(e)
            }
        }
    }
}

/// Typed booking-event publisher over the raw producer. Events are keyed by
/// booking id so all facts for one booking land on the same partition.
pub struct KafkaBookingEvents {
    producer: EventProducer,
    topic: String,
}

impl KafkaBookingEvents {
    pub fn new(producer: EventProducer, topic: String) -> Self {
        Self { producer, topic }
    }
}

#[async_trait]
impl EventPublisher for KafkaBookingEvents {
    async fn publish(
        &self,
        event: &BookingEvent,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let payload = serde_json::to_string(event)?;
        self.producer
            .publish(&self.topic, &event.booking_id.to_string(), &payload)
            .await?;
        Ok(())
    }
}
