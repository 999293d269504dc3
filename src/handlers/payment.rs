use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::bookings::BookingResponse;
use crate::services::payment::{self, CardDetails};
use crate::state::AppState;

// POST /api/payment
//
// The booking reference travels with the request; there is no server-side
// "pending booking" session.
#[derive(Deserialize)]
pub struct PaymentRequest {
    pub booking_id: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub exp: String,
    #[serde(default)]
    pub cvv: String,
}

pub async fn submit_payment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PaymentRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let card = CardDetails {
        card_number: body.card_number,
        exp: body.exp,
        cvv: body.cvv,
    };

    let booking = {
        let db = state.db.lock().unwrap();
        payment::record_payment(&db, &body.booking_id, &card)?
    };

    Ok(Json(BookingResponse::from_booking(booking)))
}
