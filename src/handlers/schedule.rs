use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::db::queries;
use crate::errors::AppError;
use crate::handlers::bookings::BookingResponse;
use crate::state::AppState;

// GET /api/schedule?date=YYYY-MM-DD
//
// The day's worklist: approved and paid bookings in slot order. A missing
// or malformed date falls back to today.
#[derive(Deserialize)]
pub struct ScheduleQuery {
    pub date: Option<String>,
}

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let date = query
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .unwrap_or_else(|| Utc::now().date_naive());

    let bookings = {
        let db = state.db.lock().unwrap();
        queries::schedule_for_date(&db, date)?
    };

    Ok(Json(
        bookings
            .into_iter()
            .map(BookingResponse::from_booking)
            .collect(),
    ))
}
