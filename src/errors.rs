use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::booking::BookingError;
use crate::services::lifecycle::LifecycleError;
use crate::services::payment::PaymentError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(anyhow::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("time slot not available: {0}")]
    SlotUnavailable(String),

    #[error("invalid payment input: {0}")]
    InvalidPaymentInput(String),

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error("payment already recorded: {0}")]
    AlreadyPaid(String),

    #[error("slot already approved for another booking: {0}")]
    ApprovalConflict(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingField(_)
            | AppError::InvalidDate(_)
            | AppError::InvalidPaymentInput(_)
            | AppError::UnknownAction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SlotUnavailable(_)
            | AppError::InvalidTransition(_)
            | AppError::AlreadyPaid(_)
            | AppError::ApprovalConflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        AppError::Database(e)
    }
}

impl From<BookingError> for AppError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::MissingField(field) => AppError::MissingField(field),
            BookingError::InvalidDate(value) => AppError::InvalidDate(value),
            BookingError::SlotUnavailable(slot) => AppError::SlotUnavailable(slot),
            BookingError::Store(err) => AppError::Database(err),
        }
    }
}

impl From<LifecycleError> for AppError {
    fn from(e: LifecycleError) -> Self {
        match e {
            LifecycleError::NotFound(id) => AppError::NotFound(format!("booking {id}")),
            LifecycleError::UnknownAction(token) => AppError::UnknownAction(token),
            LifecycleError::InvalidTransition { from, action } => AppError::InvalidTransition(
                format!("cannot {} a {} booking", action.as_str(), from.as_str()),
            ),
            LifecycleError::SlotConflict { time } => AppError::ApprovalConflict(time),
            LifecycleError::Store(err) => AppError::Database(err),
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(e: PaymentError) -> Self {
        match e {
            PaymentError::NotFound(id) => AppError::NotFound(format!("booking {id}")),
            PaymentError::InvalidCard(reason) => {
                AppError::InvalidPaymentInput(reason.to_string())
            }
            PaymentError::AlreadyPaid(id) => AppError::AlreadyPaid(id),
            PaymentError::Store(err) => AppError::Database(err),
        }
    }
}
