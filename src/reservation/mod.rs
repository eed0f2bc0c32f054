mod availability;
mod dates;
mod draft;
mod error;
mod flow;
mod view;

pub use availability::{AvailabilityTable, DateStatus, TimeSlot, MOCK_AVAILABILITY};
pub use dates::{format_date_input, min_reservation_date, parse_date_input, MIN_LEAD_DAYS};
pub use draft::{
    ContactDetails, ContactField, ReservationDraft, ReservationPayload, DEFAULT_GUESTS,
    MAX_GUESTS, MIN_GUESTS,
};
pub use error::{MissingStep, ValidationError};
pub use flow::{ReservationFlow, Submission, WizardPhase};
pub use view::{
    FocusHint, GuestControls, Panel, SlotView, Transition, ViewState, ViewUpdate, WizardStep,
};
