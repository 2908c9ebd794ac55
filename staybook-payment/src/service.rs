use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tokio::time::sleep;
use tracing::{error, info};
use uuid::Uuid;

use staybook_shared::{PaymentRequest, PaymentResponse, PaymentWebhook, SettlementStatus};

use crate::webhook::WebhookSink;

/// Simulated payment processor. Accepts a payment immediately with status
/// PROCESSING and settles it asynchronously after a fixed delay: amounts of
/// zero or less fail, everything else is paid. The outcome is delivered once
/// via webhook; delivery failures are logged, never retried, never surfaced.
///
/// Settlement tasks are owned by a JoinSet registry rather than detached:
/// finished entries are reaped on each new request and `shutdown` drains the
/// registry so an orderly stop does not drop in-flight settlements. A crash
/// before settlement still loses the outcome; there is no durable timer.
pub struct PaymentService {
    sink: Arc<dyn WebhookSink>,
    settle_after: Duration,
    settlements: Mutex<JoinSet<()>>,
}

impl PaymentService {
    pub fn new(sink: Arc<dyn WebhookSink>, settle_after: Duration) -> Self {
        Self {
            sink,
            settle_after,
            settlements: Mutex::new(JoinSet::new()),
        }
    }

    pub async fn process_payment(&self, request: PaymentRequest) -> PaymentResponse {
        let payment_id = Uuid::new_v4();

        let mut settlements = self.settlements.lock().await;
        while settlements.try_join_next().is_some() {}
        settlements.spawn(settle(
            self.sink.clone(),
            self.settle_after,
            payment_id,
            request.clone(),
        ));
        drop(settlements);

        info!(
            payment_id = %payment_id,
            booking_id = %request.booking_id,
            amount = request.amount,
            "payment accepted for processing"
        );

        PaymentResponse {
            payment_id,
            status: SettlementStatus::Processing,
            message: Some("payment is being processed".to_string()),
        }
    }

    /// Wait for every in-flight settlement to finish.
    pub async fn shutdown(&self) {
        let mut settlements = self.settlements.lock().await;
        while settlements.join_next().await.is_some() {}
    }
}

async fn settle(
    sink: Arc<dyn WebhookSink>,
    delay: Duration,
    payment_id: Uuid,
    request: PaymentRequest,
) {
    sleep(delay).await;

    let status = if request.amount <= 0.0 {
        SettlementStatus::Failed
    } else {
        SettlementStatus::Paid
    };

    let webhook = PaymentWebhook {
        payment_id,
        booking_id: request.booking_id,
        status,
        amount: request.amount,
        processed_at: Utc::now(),
    };

    if let Err(e) = sink.deliver(&webhook).await {
        error!(payment_id = %payment_id, error = %e, "failed to send payment webhook");
    }
}
