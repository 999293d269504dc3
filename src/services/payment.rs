use rusqlite::Connection;

use crate::db::queries;
use crate::models::Booking;

/// Demo card thresholds. No gateway is called; a real payment processor
/// would replace this whole module.
const MIN_CARD_NUMBER_LEN: usize = 12;
const MIN_CVV_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct CardDetails {
    pub card_number: String,
    pub exp: String,
    pub cvv: String,
}

#[derive(Debug)]
pub enum PaymentError {
    NotFound(String),
    InvalidCard(&'static str),
    AlreadyPaid(String),
    Store(anyhow::Error),
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentError::NotFound(id) => write!(f, "booking not found: {id}"),
            PaymentError::InvalidCard(reason) => write!(f, "invalid card details: {reason}"),
            PaymentError::AlreadyPaid(id) => {
                write!(f, "payment already recorded for booking: {id}")
            }
            PaymentError::Store(e) => write!(f, "storage error: {e}"),
        }
    }
}

fn validate_card(card: &CardDetails) -> Result<(), PaymentError> {
    if card.card_number.trim().len() < MIN_CARD_NUMBER_LEN {
        return Err(PaymentError::InvalidCard("card number too short"));
    }
    if card.cvv.trim().len() < MIN_CVV_LEN {
        return Err(PaymentError::InvalidCard("cvv too short"));
    }
    Ok(())
}

/// Record a mock payment against a booking. The paid flag flips false→true
/// exactly once; paying twice is a visible error, not a silent no-op.
pub fn record_payment(
    conn: &Connection,
    booking_id: &str,
    card: &CardDetails,
) -> Result<Booking, PaymentError> {
    validate_card(card)?;

    let booking = queries::get_booking_by_id(conn, booking_id)
        .map_err(PaymentError::Store)?
        .ok_or_else(|| PaymentError::NotFound(booking_id.to_string()))?;

    if booking.paid {
        return Err(PaymentError::AlreadyPaid(booking_id.to_string()));
    }

    let flipped = queries::mark_paid(conn, booking_id).map_err(PaymentError::Store)?;
    if !flipped {
        return Err(PaymentError::AlreadyPaid(booking_id.to_string()));
    }

    tracing::info!(id = %booking_id, amount = booking.amount, "payment recorded");

    queries::get_booking_by_id(conn, booking_id)
        .map_err(PaymentError::Store)?
        .ok_or_else(|| PaymentError::NotFound(booking_id.to_string()))
}
