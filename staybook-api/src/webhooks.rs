use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};

use staybook_shared::PaymentWebhook;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/webhooks/payment", post(handle_payment_webhook))
}

/// POST /api/webhooks/payment
/// Receives settlement outcomes from the payment service and applies them
/// to the booking's payment status.
async fn handle_payment_webhook(
    State(state): State<AppState>,
    Json(payload): Json<PaymentWebhook>,
) -> Result<StatusCode, AppError> {
    tracing::info!(
        "Received payment webhook: {} for booking {} ({})",
        payload.payment_id,
        payload.booking_id,
        payload.status
    );

    state
        .orchestrator
        .update_payment_status(payload.booking_id, &payload.status.to_string())
        .await
        .map_err(AppError::Booking)?;

    Ok(StatusCode::OK)
}
