use chrono::{Days, NaiveDate};

/// Reservations open this many days after the client's local date
pub const MIN_LEAD_DAYS: u64 = 1;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// First date a guest may pick, relative to the local date at page load.
pub fn min_reservation_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(MIN_LEAD_DAYS)).unwrap_or(today)
}

/// Parse the value of an `<input type="date">`.
///
/// Returns `None` for anything that isn't a complete `YYYY-MM-DD` date.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_FORMAT).ok()
}

/// Format a date the way the date input and the availability table expect it.
pub fn format_date_input(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}
