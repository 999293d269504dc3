use rusqlite::Connection;

use crate::db::queries;
use crate::models::{Booking, BookingStatus};

/// Administrator action on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Approve,
    Reject,
    Complete,
}

impl AdminAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::Approve => "approve",
            AdminAction::Reject => "reject",
            AdminAction::Complete => "complete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "approve" => Some(AdminAction::Approve),
            "reject" => Some(AdminAction::Reject),
            "complete" => Some(AdminAction::Complete),
            _ => None,
        }
    }
}

/// The transition table. `None` means the pair is not allowed.
pub fn next_status(current: BookingStatus, action: AdminAction) -> Option<BookingStatus> {
    match (current, action) {
        (BookingStatus::Pending, AdminAction::Approve) => Some(BookingStatus::Approved),
        (BookingStatus::Pending, AdminAction::Reject) => Some(BookingStatus::Rejected),
        (BookingStatus::Approved, AdminAction::Complete) => Some(BookingStatus::Completed),
        _ => None,
    }
}

#[derive(Debug)]
pub enum LifecycleError {
    NotFound(String),
    UnknownAction(String),
    InvalidTransition {
        from: BookingStatus,
        action: AdminAction,
    },
    SlotConflict {
        time: String,
    },
    Store(anyhow::Error),
}

impl std::fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleError::NotFound(id) => write!(f, "booking not found: {id}"),
            LifecycleError::UnknownAction(token) => write!(f, "unknown action: {token}"),
            LifecycleError::InvalidTransition { from, action } => {
                write!(f, "cannot {} a {} booking", action.as_str(), from.as_str())
            }
            LifecycleError::SlotConflict { time } => {
                write!(f, "slot {time} already has an approved booking")
            }
            LifecycleError::Store(e) => write!(f, "storage error: {e}"),
        }
    }
}

/// Apply an action token to a booking and return the updated record.
///
/// Approval records the technician when one is supplied, and holds the slot
/// with a check-and-set so two approvals can never share a (date, time).
pub fn apply_action(
    conn: &Connection,
    booking_id: &str,
    action_token: &str,
    technician: Option<&str>,
) -> Result<Booking, LifecycleError> {
    let action = AdminAction::parse(action_token)
        .ok_or_else(|| LifecycleError::UnknownAction(action_token.to_string()))?;

    let booking = queries::get_booking_by_id(conn, booking_id)
        .map_err(LifecycleError::Store)?
        .ok_or_else(|| LifecycleError::NotFound(booking_id.to_string()))?;

    let target = next_status(booking.status, action).ok_or(LifecycleError::InvalidTransition {
        from: booking.status,
        action,
    })?;

    match action {
        AdminAction::Approve => {
            let technician = technician.map(str::trim).filter(|t| !t.is_empty());
            let won = queries::approve_booking(conn, booking_id, technician)
                .map_err(LifecycleError::Store)?;
            if !won {
                return Err(LifecycleError::SlotConflict {
                    time: booking.time.clone(),
                });
            }
        }
        AdminAction::Reject | AdminAction::Complete => {
            queries::set_status(conn, booking_id, target).map_err(LifecycleError::Store)?;
        }
    }

    tracing::info!(id = %booking_id, action = action.as_str(), status = target.as_str(), "booking transitioned");

    queries::get_booking_by_id(conn, booking_id)
        .map_err(LifecycleError::Store)?
        .ok_or_else(|| LifecycleError::NotFound(booking_id.to_string()))
}
