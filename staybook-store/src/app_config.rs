use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub kafka: KafkaConfig,
    pub services: ServicesConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KafkaConfig {
    pub brokers: String,
    pub booking_topic: String,
    pub consumer_group: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub hotel_url: String,
    pub delivery_url: String,
    /// When unset the orchestrator runs without a payment gateway and
    /// bookings confirm without a payment being raised.
    pub payment_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    /// Booking-service endpoint the simulator posts settlement webhooks to.
    pub webhook_url: String,
    #[serde(default = "default_settle_after")]
    pub settle_after_secs: u64,
}

fn default_settle_after() -> u64 {
    2
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("STAYBOOK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
