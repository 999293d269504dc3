use chrono::{NaiveDate, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::queries;
use crate::models::{Booking, BookingStatus, ServiceTier};
use crate::services::{pricing, slots};

/// Raw booking submission, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewBooking {
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: Option<String>,
    pub date: String,
    pub time: String,
    pub address: String,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub enum BookingError {
    MissingField(&'static str),
    InvalidDate(String),
    SlotUnavailable(String),
    Store(anyhow::Error),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::MissingField(field) => {
                write!(f, "missing required field: {field}")
            }
            BookingError::SlotUnavailable(slot) => {
                write!(f, "time slot {slot} is no longer available")
            }
            BookingError::InvalidDate(value) => write!(f, "invalid date: {value}"),
            BookingError::Store(e) => write!(f, "storage error: {e}"),
        }
    }
}

/// Validate and persist a new booking. Nothing is written on failure.
///
/// The created booking starts pending and unpaid; its amount is fixed from
/// the pricing table at this point and never recomputed.
pub fn create_booking(conn: &Connection, req: NewBooking) -> Result<Booking, BookingError> {
    let customer_name = required(&req.customer_name, "customer_name")?;
    let phone = required(&req.phone, "phone")?;
    let date_str = required(&req.date, "date")?;
    let time = required(&req.time, "time")?;
    let address = required(&req.address, "address")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDate(date_str.clone()))?;

    let open = slots::available_slots(conn, date).map_err(BookingError::Store)?;
    if !open.contains(&time) {
        return Err(BookingError::SlotUnavailable(time));
    }

    let service = ServiceTier::parse(req.service.as_deref().unwrap_or_default());
    let now = Utc::now().naive_utc();

    let booking = Booking {
        id: Uuid::new_v4().to_string(),
        customer_name,
        phone,
        email: none_if_blank(req.email),
        service,
        date,
        time,
        address,
        notes: none_if_blank(req.notes),
        amount: pricing::price_for(service),
        paid: false,
        status: BookingStatus::Pending,
        technician: None,
        created_at: now,
        updated_at: now,
    };

    queries::insert_booking(conn, &booking).map_err(BookingError::Store)?;
    tracing::info!(id = %booking.id, date = %booking.date, time = %booking.time, "booking created");

    Ok(booking)
}

fn required(value: &str, field: &'static str) -> Result<String, BookingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
