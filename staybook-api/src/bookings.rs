use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use staybook_shared::{Booking, NewBooking};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/{id}", get(get_booking))
        .route("/api/bookings/user/{user_id}", get(get_bookings_by_user))
        .route("/api/bookings/hotel/{hotel_id}", get(get_bookings_by_hotel))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<NewBooking>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = state
        .orchestrator
        .create_booking(request)
        .await
        .map_err(AppError::Booking)?;

    state.metrics.bookings_created.inc();

    Ok((StatusCode::CREATED, Json(booking)))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = state.orchestrator.booking(id).await.map_err(AppError::Booking)?;
    Ok(Json(booking))
}

async fn get_bookings_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .orchestrator
        .bookings_by_user(user_id)
        .await
        .map_err(AppError::Booking)?;
    Ok(Json(bookings))
}

async fn get_bookings_by_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state
        .orchestrator
        .bookings_by_hotel(hotel_id)
        .await
        .map_err(AppError::Booking)?;
    Ok(Json(bookings))
}
