use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::ServiceTier;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub phone: String,
    pub email: Option<String>,
    pub service: ServiceTier,
    pub date: NaiveDate,
    pub time: String,
    pub address: String,
    pub notes: Option<String>,
    pub amount: f64,
    pub paid: bool,
    pub status: BookingStatus,
    pub technician: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "approved" => BookingStatus::Approved,
            "rejected" => BookingStatus::Rejected,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::Pending,
        }
    }
}
