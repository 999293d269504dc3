use chrono::{NaiveDate, NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingStatus, ServiceTier};

const DATE_FMT: &str = "%Y-%m-%d";
const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

// ── Bookings ──

pub fn insert_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO bookings (id, customer_name, phone, email, service, date, time, address, notes, amount, paid, status, technician, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
        params![
            booking.id,
            booking.customer_name,
            booking.phone,
            booking.email,
            booking.service.as_str(),
            booking.date.format(DATE_FMT).to_string(),
            booking.time,
            booking.address,
            booking.notes,
            booking.amount,
            booking.paid as i32,
            booking.status.as_str(),
            booking.technician,
            booking.created_at.format(TIMESTAMP_FMT).to_string(),
            booking.updated_at.format(TIMESTAMP_FMT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_booking_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        "SELECT id, customer_name, phone, email, service, date, time, address, notes, amount, paid, status, technician, created_at, updated_at
         FROM bookings WHERE id = ?1",
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Times already held by an approved booking on the given date.
pub fn approved_times(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<String>> {
    let date_str = date.format(DATE_FMT).to_string();
    let mut stmt =
        conn.prepare("SELECT time FROM bookings WHERE date = ?1 AND status = 'approved'")?;
    let rows = stmt.query_map(params![date_str], |row| row.get::<_, String>(0))?;

    let mut times = vec![];
    for row in rows {
        times.push(row?);
    }
    Ok(times)
}

/// Approved and paid bookings for a date, in slot order.
pub fn schedule_for_date(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<Booking>> {
    let date_str = date.format(DATE_FMT).to_string();
    let mut stmt = conn.prepare(
        "SELECT id, customer_name, phone, email, service, date, time, address, notes, amount, paid, status, technician, created_at, updated_at
         FROM bookings WHERE date = ?1 AND status = 'approved' AND paid = 1 ORDER BY time ASC",
    )?;
    let rows = stmt.query_map(params![date_str], |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

/// Dashboard listing: grouped by status, newest dates first, then slot order.
pub fn list_bookings(
    conn: &Connection,
    status_filter: Option<&str>,
    limit: i64,
) -> anyhow::Result<Vec<Booking>> {
    let (sql, params_vec): (String, Vec<Box<dyn rusqlite::types::ToSql>>) = match status_filter {
        Some(status) => (
            "SELECT id, customer_name, phone, email, service, date, time, address, notes, amount, paid, status, technician, created_at, updated_at \
             FROM bookings WHERE status = ?1 ORDER BY status ASC, date DESC, time ASC LIMIT ?2"
                .to_string(),
            vec![
                Box::new(status.to_string()) as Box<dyn rusqlite::types::ToSql>,
                Box::new(limit),
            ],
        ),
        None => (
            "SELECT id, customer_name, phone, email, service, date, time, address, notes, amount, paid, status, technician, created_at, updated_at \
             FROM bookings ORDER BY status ASC, date DESC, time ASC LIMIT ?1"
                .to_string(),
            vec![Box::new(limit) as Box<dyn rusqlite::types::ToSql>],
        ),
    };

    let mut stmt = conn.prepare(&sql)?;
    let params_refs: Vec<&dyn rusqlite::types::ToSql> =
        params_vec.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(params_refs.as_slice(), |row| Ok(parse_booking_row(row)))?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn set_status(conn: &Connection, id: &str, status: BookingStatus) -> anyhow::Result<bool> {
    let now = Utc::now().naive_utc().format(TIMESTAMP_FMT).to_string();
    let count = conn.execute(
        "UPDATE bookings SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.as_str(), now, id],
    )?;
    Ok(count > 0)
}

/// Check-and-set approval: succeeds only while no other booking holds the
/// same (date, time) slot approved. Returns false when the slot was lost.
pub fn approve_booking(
    conn: &Connection,
    id: &str,
    technician: Option<&str>,
) -> anyhow::Result<bool> {
    let now = Utc::now().naive_utc().format(TIMESTAMP_FMT).to_string();
    let count = conn.execute(
        "UPDATE bookings
         SET status = 'approved', technician = COALESCE(?2, technician), updated_at = ?3
         WHERE id = ?1
           AND NOT EXISTS (
               SELECT 1 FROM bookings other
               WHERE other.date = bookings.date
                 AND other.time = bookings.time
                 AND other.status = 'approved'
                 AND other.id != bookings.id
           )",
        params![id, technician, now],
    )?;
    Ok(count > 0)
}

/// Flip the paid flag, once. Returns false when the booking was already paid
/// (or absent — callers distinguish via `get_booking_by_id`).
pub fn mark_paid(conn: &Connection, id: &str) -> anyhow::Result<bool> {
    let now = Utc::now().naive_utc().format(TIMESTAMP_FMT).to_string();
    let count = conn.execute(
        "UPDATE bookings SET paid = 1, updated_at = ?2 WHERE id = ?1 AND paid = 0",
        params![id, now],
    )?;
    Ok(count > 0)
}

pub struct DashboardCounters {
    pub pending_count: i64,
    pub approved_count: i64,
    pub completed_count: i64,
    pub paid_revenue: f64,
}

pub fn get_dashboard_counters(conn: &Connection) -> anyhow::Result<DashboardCounters> {
    let count_for = |status: &str| -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM bookings WHERE status = ?1",
            params![status],
            |row| row.get(0),
        )
        .unwrap_or(0)
    };

    let paid_revenue: f64 = conn
        .query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM bookings WHERE paid = 1",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0.0);

    Ok(DashboardCounters {
        pending_count: count_for("pending"),
        approved_count: count_for("approved"),
        completed_count: count_for("completed"),
        paid_revenue,
    })
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let customer_name: String = row.get(1)?;
    let phone: String = row.get(2)?;
    let email: Option<String> = row.get(3)?;
    let service_str: String = row.get(4)?;
    let date_str: String = row.get(5)?;
    let time: String = row.get(6)?;
    let address: String = row.get(7)?;
    let notes: Option<String> = row.get(8)?;
    let amount: f64 = row.get(9)?;
    let paid: bool = row.get::<_, i32>(10)? != 0;
    let status_str: String = row.get(11)?;
    let technician: Option<String> = row.get(12)?;
    let created_at_str: String = row.get(13)?;
    let updated_at_str: String = row.get(14)?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT)
        .unwrap_or_else(|_| Utc::now().date_naive());
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, TIMESTAMP_FMT)
        .unwrap_or_else(|_| Utc::now().naive_utc());
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, TIMESTAMP_FMT)
        .unwrap_or_else(|_| Utc::now().naive_utc());

    Ok(Booking {
        id,
        customer_name,
        phone,
        email,
        service: ServiceTier::parse(&service_str),
        date,
        time,
        address,
        notes,
        amount,
        paid,
        status: BookingStatus::parse(&status_str),
        technician,
        created_at,
        updated_at,
    })
}
