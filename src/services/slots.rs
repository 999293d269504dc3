use chrono::NaiveDate;
use rusqlite::Connection;

use crate::db::queries;

/// The nine bookable slots of a working day, in chronological order.
pub const DAILY_SLOTS: [&str; 9] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00",
];

/// Slots still bookable on `date`: the fixed list minus every slot held by
/// an approved booking. Pending and rejected bookings do not block a slot.
pub fn available_slots(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<String>> {
    let taken = queries::approved_times(conn, date)?;
    Ok(DAILY_SLOTS
        .iter()
        .filter(|slot| !taken.iter().any(|t| t == *slot))
        .map(|slot| slot.to_string())
        .collect())
}
