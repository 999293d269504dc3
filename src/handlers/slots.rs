use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::slots;
use crate::state::AppState;

// GET /api/slots?date=YYYY-MM-DD
#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    pub slots: Vec<String>,
}

/// A missing or malformed date is not an error here; the caller just gets
/// an empty list, the way the booking form expects.
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let date = match query
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    {
        Some(d) => d,
        None => return Ok(Json(SlotsResponse { slots: vec![] })),
    };

    let slots = {
        let db = state.db.lock().unwrap();
        slots::available_slots(&db, date)?
    };

    Ok(Json(SlotsResponse { slots }))
}
