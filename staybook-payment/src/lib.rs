pub mod service;
pub mod webhook;

pub use service::PaymentService;
pub use webhook::{HttpWebhookSink, WebhookSink};
