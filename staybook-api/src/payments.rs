use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::post,
    Router,
};

use staybook_shared::{PaymentRequest, PaymentResponse};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/payments", post(create_payment))
}

/// POST /api/payments
/// Accepts a payment for asynchronous settlement; always answers 202.
async fn create_payment(
    State(state): State<AppState>,
    Json(mut request): Json<PaymentRequest>,
) -> (StatusCode, Json<PaymentResponse>) {
    if request.currency.is_none() {
        request.currency = Some("RUB".to_string());
    }

    let response = state.payments.process_payment(request).await;
    (StatusCode::ACCEPTED, Json(response))
}
