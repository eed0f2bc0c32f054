mod contact_step;
mod date_step;
mod guest_stepper;
mod nav_bar;
mod reservation_form;
mod reservation_success;
mod time_slot_picker;

pub use contact_step::ContactStep;
pub use date_step::DateStep;
pub use guest_stepper::GuestStepper;
pub use nav_bar::NavBar;
pub use reservation_form::ReservationForm;
pub use reservation_success::ReservationSuccess;
pub use time_slot_picker::TimeSlotPicker;
