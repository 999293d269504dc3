use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::models::Booking;
use crate::services::booking::{self, NewBooking};
use crate::state::AppState;

// POST /api/bookings
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub address: String,
    pub notes: Option<String>,
}

#[derive(Serialize)]
pub struct BookingResponse {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: String,
    pub date: String,
    pub time: String,
    pub address: String,
    pub notes: Option<String>,
    pub amount: f64,
    pub paid: bool,
    pub status: String,
    pub technician: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl BookingResponse {
    pub fn from_booking(b: Booking) -> Self {
        BookingResponse {
            id: b.id,
            customer_name: b.customer_name,
            phone: b.phone,
            email: b.email,
            service: b.service.as_str().to_string(),
            date: b.date.format("%Y-%m-%d").to_string(),
            time: b.time,
            address: b.address,
            notes: b.notes,
            amount: b.amount,
            paid: b.paid,
            status: b.status.as_str().to_string(),
            technician: b.technician,
            created_at: b.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: b.updated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let request = NewBooking {
        customer_name: body.customer_name,
        phone: body.phone,
        email: body.email,
        service: body.service,
        date: body.date,
        time: body.time,
        address: body.address,
        notes: body.notes,
    };

    let booking = {
        let db = state.db.lock().unwrap();
        booking::create_booking(&db, request)?
    };

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse::from_booking(booking)),
    ))
}

// GET /api/bookings/:id
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = {
        let db = state.db.lock().unwrap();
        queries::get_booking_by_id(&db, &id)?
    };

    match booking {
        Some(b) => Ok(Json(BookingResponse::from_booking(b))),
        None => Err(AppError::NotFound(format!("booking {id}"))),
    }
}
