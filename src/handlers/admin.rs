use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::db::queries;
use crate::errors::AppError;
use crate::handlers::bookings::BookingResponse;
use crate::services::auth::CredentialVerifier;
use crate::services::lifecycle;
use crate::state::AppState;

#[allow(clippy::result_large_err)]
fn check_auth(headers: &HeaderMap, credentials: &dyn CredentialVerifier) -> Result<(), Response> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let token = auth.strip_prefix("Bearer ").unwrap_or("");
    if !credentials.verify(token) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"error": "unauthorized"})),
        )
            .into_response());
    }
    Ok(())
}

// GET /api/admin/status
#[derive(Serialize)]
pub struct StatusResponse {
    pending_count: i64,
    approved_count: i64,
    completed_count: i64,
    paid_revenue: f64,
}

pub async fn get_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<StatusResponse>, Response> {
    check_auth(&headers, state.credentials.as_ref())?;

    let counters = {
        let db = state.db.lock().unwrap();
        queries::get_dashboard_counters(&db)
            .map_err(|e| AppError::Database(e).into_response())?
    };

    Ok(Json(StatusResponse {
        pending_count: counters.pending_count,
        approved_count: counters.approved_count,
        completed_count: counters.completed_count,
        paid_revenue: counters.paid_revenue,
    }))
}

// GET /api/admin/bookings
#[derive(Deserialize)]
pub struct BookingsQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
}

pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<BookingResponse>>, Response> {
    check_auth(&headers, state.credentials.as_ref())?;

    let limit = query.limit.unwrap_or(50);
    let status_filter = query.status.as_deref();

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::list_bookings(&db, status_filter, limit)
            .map_err(|e| AppError::Database(e).into_response())?
    };

    Ok(Json(
        bookings
            .into_iter()
            .map(BookingResponse::from_booking)
            .collect(),
    ))
}

// POST /api/admin/bookings/:id/action
#[derive(Deserialize)]
pub struct ActionRequest {
    #[serde(default)]
    pub action: String,
    pub technician: Option<String>,
}

pub async fn booking_action(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<ActionRequest>,
) -> Result<Json<BookingResponse>, Response> {
    check_auth(&headers, state.credentials.as_ref())?;

    let booking = {
        let db = state.db.lock().unwrap();
        lifecycle::apply_action(&db, &id, &body.action, body.technician.as_deref())
            .map_err(|e| AppError::from(e).into_response())?
    };

    Ok(Json(BookingResponse::from_booking(booking)))
}
