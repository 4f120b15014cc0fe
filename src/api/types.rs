// Time endpoint response types

use serde::Serialize;

/// Body of `GET /datetime/current`
#[derive(Debug, Serialize)]
pub struct CurrentDatetime {
    /// Current UTC date and time, ISO 8601 with an explicit +00:00 offset
    pub current_datetime_utc: String,
}

/// Body of `GET /date/current`
#[derive(Debug, Serialize)]
pub struct CurrentDate {
    /// Current UTC date, YYYY-MM-DD
    pub current_date_utc: String,
}
