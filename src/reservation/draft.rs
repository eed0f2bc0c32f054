use chrono::NaiveDate;
use serde::Serialize;

use super::dates::format_date_input;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 8;
pub const DEFAULT_GUESTS: u8 = 2;

/// Free-text contact fields. Not validated by the flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Notes,
}

impl ContactDetails {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Notes => self.notes = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Notes => &self.notes,
        }
    }
}

/// The in-progress reservation for one page session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub selected_date: Option<NaiveDate>,
    pub selected_time: Option<&'static str>,
    /// Always within `MIN_GUESTS..=MAX_GUESTS`
    pub guest_count: u8,
    pub contact: ContactDetails,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            selected_date: None,
            selected_time: None,
            guest_count: DEFAULT_GUESTS,
            contact: ContactDetails::default(),
        }
    }
}

impl ReservationDraft {
    /// Apply a +1/-1 step. Returns the new count, or `None` if it would leave the range.
    pub fn step_guests(&mut self, delta: i8) -> Option<u8> {
        let next = self.guest_count.checked_add_signed(delta)?;
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&next) {
            return None;
        }
        self.guest_count = next;
        Some(next)
    }

    pub fn has_guests(&self) -> bool {
        (MIN_GUESTS..=MAX_GUESTS).contains(&self.guest_count)
    }
}

/// What gets handed to the reservation service on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    pub date: String,
    pub time: String,
    pub guest_count: u8,
    #[serde(flatten)]
    pub contact: ContactDetails,
}

impl ReservationPayload {
    /// Build a payload from a complete draft; `None` if date or time is missing.
    pub fn from_draft(draft: &ReservationDraft) -> Option<Self> {
        Some(Self {
            date: format_date_input(draft.selected_date?),
            time: draft.selected_time?.to_string(),
            guest_count: draft.guest_count,
            contact: draft.contact.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = ReservationDraft::default();
        assert_eq!(draft.guest_count, 2);
        assert!(draft.selected_date.is_none());
        assert!(draft.selected_time.is_none());
        assert_eq!(draft.contact, ContactDetails::default());
    }

    #[test]
    fn test_step_guests_stays_in_range() {
        let mut draft = ReservationDraft::default();
        assert_eq!(draft.step_guests(-1), Some(1));
        assert_eq!(draft.step_guests(-1), None, "Decrement below 1 must be rejected");
        assert_eq!(draft.guest_count, 1);

        for _ in 0..20 {
            draft.step_guests(1);
        }
        assert_eq!(draft.guest_count, MAX_GUESTS);
        assert_eq!(draft.step_guests(1), None, "Increment above 8 must be rejected");
        assert_eq!(draft.guest_count, MAX_GUESTS);
    }

    #[test]
    fn test_contact_set_and_get() {
        let mut contact = ContactDetails::default();
        contact.set(ContactField::Email, "ada@example.com".to_string());
        contact.set(ContactField::Notes, "window seat".to_string());
        assert_eq!(contact.get(ContactField::Email), "ada@example.com");
        assert_eq!(contact.get(ContactField::Notes), "window seat");
        assert_eq!(contact.get(ContactField::Name), "");
    }

    #[test]
    fn test_payload_requires_date_and_time() {
        let mut draft = ReservationDraft::default();
        assert!(ReservationPayload::from_draft(&draft).is_none());

        draft.selected_date = NaiveDate::from_ymd_opt(2024, 12, 24);
        assert!(ReservationPayload::from_draft(&draft).is_none());

        draft.selected_time = Some("10:30");
        draft.contact.name = "Ada".to_string();
        let payload = ReservationPayload::from_draft(&draft).unwrap();
        assert_eq!(payload.date, "2024-12-24");
        assert_eq!(payload.time, "10:30");
        assert_eq!(payload.guest_count, 2);
        assert_eq!(payload.contact.name, "Ada");
    }

    #[test]
    fn test_payload_json_shape() {
        let payload = ReservationPayload {
            date: "2024-12-24".to_string(),
            time: "10:30".to_string(),
            guest_count: 3,
            contact: ContactDetails {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: String::new(),
                notes: String::new(),
            },
        };
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["date"], "2024-12-24");
        assert_eq!(json["time"], "10:30");
        assert_eq!(json["guestCount"], 3);
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["phone"], "");
        assert_eq!(json["notes"], "");
    }
}
