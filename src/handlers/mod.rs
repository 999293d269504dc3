pub mod admin;
pub mod bookings;
pub mod catalog;
pub mod health;
pub mod payment;
pub mod schedule;
pub mod slots;
