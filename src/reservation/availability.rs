use chrono::NaiveDate;

/// A single bookable time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    /// `HH:MM`, also used as the slot's label
    pub time: &'static str,
    pub available: bool,
    /// Bookable but scarce. Purely advisory.
    pub limited: bool,
}

impl TimeSlot {
    const fn open(time: &'static str) -> Self {
        Self { time, available: true, limited: false }
    }

    const fn limited(time: &'static str) -> Self {
        Self { time, available: true, limited: true }
    }

    const fn booked(time: &'static str) -> Self {
        Self { time, available: false, limited: false }
    }
}

/// Availability classification of a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStatus {
    Available,
    Limited,
    FullyBooked,
}

impl DateStatus {
    /// Text shown in the availability indicator
    pub fn message(&self) -> &'static str {
        match self {
            DateStatus::Available => "Available",
            DateStatus::Limited => "Limited availability on this date. Book soon!",
            DateStatus::FullyBooked => "Fully booked on this date. Please select another date.",
        }
    }

    /// CSS modifier for the indicator
    pub fn css_class(&self) -> &'static str {
        match self {
            DateStatus::Available => "available",
            DateStatus::Limited => "limited",
            DateStatus::FullyBooked => "unavailable",
        }
    }

    pub fn is_bookable(&self) -> bool {
        !matches!(self, DateStatus::FullyBooked)
    }
}

/// Static, read-only availability data.
///
/// Dates are ISO `YYYY-MM-DD` strings. Slots are kept in display order and
/// never sorted at runtime.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityTable {
    pub fully_booked_dates: &'static [&'static str],
    pub limited_dates: &'static [&'static str],
    pub time_slots: &'static [TimeSlot],
}

impl AvailabilityTable {
    /// Classify a date. Fully booked wins over limited if a date is listed twice.
    pub fn classify(&self, date: NaiveDate) -> DateStatus {
        let key = date.format("%Y-%m-%d").to_string();
        if self.fully_booked_dates.contains(&key.as_str()) {
            DateStatus::FullyBooked
        } else if self.limited_dates.contains(&key.as_str()) {
            DateStatus::Limited
        } else {
            DateStatus::Available
        }
    }

    pub fn slot(&self, time: &str) -> Option<&TimeSlot> {
        self.time_slots.iter().find(|slot| slot.time == time)
    }
}

/// Demo data until a real availability service exists
pub static MOCK_AVAILABILITY: AvailabilityTable = AvailabilityTable {
    fully_booked_dates: &["2024-12-25", "2024-12-31"],
    limited_dates: &["2024-12-24", "2024-12-30"],
    time_slots: &[
        TimeSlot::open("09:00"),
        TimeSlot::open("09:30"),
        TimeSlot::open("10:00"),
        TimeSlot::limited("10:30"),
        TimeSlot::open("11:00"),
        TimeSlot::open("11:30"),
        TimeSlot::limited("12:00"),
        TimeSlot::booked("12:30"),
        TimeSlot::open("13:00"),
        TimeSlot::open("13:30"),
        TimeSlot::open("14:00"),
        TimeSlot::booked("14:30"),
        TimeSlot::open("15:00"),
        TimeSlot::open("15:30"),
        TimeSlot::open("16:00"),
        TimeSlot::open("16:30"),
        TimeSlot::open("17:00"),
        TimeSlot::booked("17:30"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_classify_known_dates() {
        let table = &MOCK_AVAILABILITY;
        assert_eq!(table.classify(date("2024-12-25")), DateStatus::FullyBooked);
        assert_eq!(table.classify(date("2024-12-31")), DateStatus::FullyBooked);
        assert_eq!(table.classify(date("2024-12-24")), DateStatus::Limited);
        assert_eq!(table.classify(date("2024-12-30")), DateStatus::Limited);
        assert_eq!(table.classify(date("2024-12-26")), DateStatus::Available);
        assert_eq!(table.classify(date("2031-01-01")), DateStatus::Available);
    }

    #[test]
    fn test_fully_booked_takes_precedence() {
        let table = AvailabilityTable {
            fully_booked_dates: &["2025-01-01"],
            limited_dates: &["2025-01-01"],
            time_slots: &[],
        };
        assert_eq!(table.classify(date("2025-01-01")), DateStatus::FullyBooked);
    }

    #[test]
    fn test_slots_keep_display_order() {
        let times: Vec<&str> = MOCK_AVAILABILITY.time_slots.iter().map(|s| s.time).collect();
        assert_eq!(times.len(), 18);
        assert_eq!(times.first(), Some(&"09:00"));
        assert_eq!(times.last(), Some(&"17:30"));
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted, "Mock table should already be chronological");
    }

    #[test]
    fn test_booked_slots_are_never_limited() {
        for slot in MOCK_AVAILABILITY.time_slots {
            assert!(
                slot.available || !slot.limited,
                "Slot {} is booked and limited at once",
                slot.time
            );
        }
        let booked: Vec<&str> = MOCK_AVAILABILITY
            .time_slots
            .iter()
            .filter(|s| !s.available)
            .map(|s| s.time)
            .collect();
        assert_eq!(booked, vec!["12:30", "14:30", "17:30"]);
    }

    #[test]
    fn test_status_text_and_class() {
        assert_eq!(DateStatus::Available.message(), "Available");
        assert!(DateStatus::Limited.message().starts_with("Limited"));
        assert!(DateStatus::FullyBooked.message().starts_with("Fully booked"));
        assert_eq!(DateStatus::FullyBooked.css_class(), "unavailable");
        assert!(!DateStatus::FullyBooked.is_bookable());
        assert!(DateStatus::Limited.is_bookable());
    }
}
