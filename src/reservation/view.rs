//! View instructions emitted by the reservation flow, and the view model the
//! rendering layer folds them into.
//!
//! Nothing here touches the DOM. `ViewState::apply` is what the Leptos
//! components observe, and what tests inspect instead of a rendered page.

use super::availability::{DateStatus, TimeSlot};
use super::draft::{ContactDetails, ContactField, MAX_GUESTS, MIN_GUESTS};

/// Steps revealed one after another as the draft fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Time,
    Guests,
    Contact,
    Submit,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Time,
        WizardStep::Guests,
        WizardStep::Contact,
        WizardStep::Submit,
    ];

    /// DOM id of the step's container
    pub fn element_id(&self) -> &'static str {
        match self {
            WizardStep::Time => "time-step",
            WizardStep::Guests => "guests-step",
            WizardStep::Contact => "contact-step",
            WizardStep::Submit => "submit-section",
        }
    }

    fn index(&self) -> usize {
        match self {
            WizardStep::Time => 0,
            WizardStep::Guests => 1,
            WizardStep::Contact => 2,
            WizardStep::Submit => 3,
        }
    }
}

/// One rendered time-slot control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotView {
    pub time: &'static str,
    pub booked: bool,
    pub limited: bool,
    pub selected: bool,
}

impl SlotView {
    pub fn from_slot(slot: &TimeSlot) -> Self {
        Self {
            time: slot.time,
            booked: !slot.available,
            limited: slot.available && slot.limited,
            selected: false,
        }
    }

    pub fn class_name(&self) -> String {
        let mut class = String::from("time-slot");
        if self.booked {
            class.push_str(" booked");
        } else if self.limited {
            class.push_str(" limited");
        }
        if self.selected {
            class.push_str(" selected");
        }
        class
    }
}

/// Guest stepper display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuestControls {
    pub count: u8,
    pub can_decrease: bool,
    pub can_increase: bool,
}

impl GuestControls {
    pub fn for_count(count: u8) -> Self {
        Self {
            count,
            can_decrease: count > MIN_GUESTS,
            can_increase: count < MAX_GUESTS,
        }
    }
}

/// Which of the two panels is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Form,
    Confirmation,
}

/// Where the view may scroll after a transition. Cosmetic; safe to ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusHint {
    /// A freshly revealed step, scrolled to the nearest edge once layout settles
    Step(WizardStep),
    Confirmation,
    /// Top of the reservation section
    FlowTop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    Show(WizardStep),
    Hide(WizardStep),
    ShowStatus(DateStatus),
    HideStatus,
    /// Custom validity message for the date input; `None` clears it
    DateValidity(Option<String>),
    DateValue(String),
    RenderSlots(Vec<SlotView>),
    SelectSlot(Option<&'static str>),
    Guests(GuestControls),
    Contact(ContactField, String),
    ClearInputs,
    ShowPanel(Panel),
}

/// Output of every flow transition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    pub updates: Vec<ViewUpdate>,
    pub focus: Option<FocusHint>,
}

impl Transition {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.focus.is_none()
    }
}

/// Everything the rendering layer needs to draw the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    visible: [bool; 4],
    pub status: Option<DateStatus>,
    pub date_validity: Option<String>,
    pub date_value: String,
    pub slots: Vec<SlotView>,
    pub guests: GuestControls,
    pub contact: ContactDetails,
    pub panel: Panel,
}

impl ViewState {
    pub fn new(guests: GuestControls) -> Self {
        Self {
            visible: [false; 4],
            status: None,
            date_validity: None,
            date_value: String::new(),
            slots: Vec::new(),
            guests,
            contact: ContactDetails::default(),
            panel: Panel::Form,
        }
    }

    pub fn is_visible(&self, step: WizardStep) -> bool {
        self.visible[step.index()]
    }

    pub fn visible_steps(&self) -> Vec<WizardStep> {
        WizardStep::ALL
            .into_iter()
            .filter(|step| self.is_visible(*step))
            .collect()
    }

    pub fn selected_slot(&self) -> Option<&'static str> {
        self.slots.iter().find(|slot| slot.selected).map(|slot| slot.time)
    }

    pub fn apply(&mut self, update: &ViewUpdate) {
        match update {
            ViewUpdate::Show(step) => self.visible[step.index()] = true,
            ViewUpdate::Hide(step) => self.visible[step.index()] = false,
            ViewUpdate::ShowStatus(status) => self.status = Some(*status),
            ViewUpdate::HideStatus => self.status = None,
            ViewUpdate::DateValidity(message) => self.date_validity = message.clone(),
            ViewUpdate::DateValue(value) => self.date_value = value.clone(),
            ViewUpdate::RenderSlots(slots) => self.slots = slots.clone(),
            ViewUpdate::SelectSlot(time) => {
                for slot in &mut self.slots {
                    slot.selected = Some(slot.time) == *time && !slot.booked;
                }
            }
            ViewUpdate::Guests(controls) => self.guests = *controls,
            ViewUpdate::Contact(field, value) => self.contact.set(*field, value.clone()),
            ViewUpdate::ClearInputs => {
                self.date_value.clear();
                self.contact = ContactDetails::default();
            }
            ViewUpdate::ShowPanel(panel) => self.panel = *panel,
        }
    }

    pub fn apply_all(&mut self, updates: &[ViewUpdate]) {
        for update in updates {
            self.apply(update);
        }
    }
}
