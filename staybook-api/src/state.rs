use std::sync::Arc;

use staybook_booking::BookingOrchestrator;
use staybook_payment::PaymentService;
use staybook_store::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<BookingOrchestrator>,
    pub payments: Arc<PaymentService>,
    pub metrics: Arc<Metrics>,
}
