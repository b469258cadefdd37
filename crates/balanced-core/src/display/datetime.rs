//! DateTime display utilities.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// A wrapper around `Timestamp` that formats the calendar date in the
/// system timezone via the `Display` trait, as `YYYY-MM-DD`.
pub struct LocalDate<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDate<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0.to_zoned(TimeZone::system()).strftime("%Y-%m-%d")
        )
    }
}
