use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Thai locale time: 24-hour clock, two digits per field.
pub fn format_clock<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%H:%M:%S").to_string()
}
