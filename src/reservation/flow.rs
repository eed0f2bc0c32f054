use chrono::NaiveDate;

use super::availability::{AvailabilityTable, DateStatus};
use super::dates::{format_date_input, min_reservation_date, parse_date_input};
use super::draft::{ContactField, ReservationDraft, ReservationPayload};
use super::error::{MissingStep, ValidationError};
use super::view::{
    FocusHint, GuestControls, Panel, SlotView, Transition, ViewState, ViewUpdate, WizardStep,
};

const FULLY_BOOKED_VALIDITY: &str = "This date is fully booked";

/// Progress through the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Initial,
    DateChosen,
    TimeChosen,
    ReadyToSubmit,
    Submitted,
}

/// Result of a successful `submit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub payload: ReservationPayload,
    pub transition: Transition,
}

/// Drives the date -> time -> guests -> contact -> submit wizard.
///
/// Each handler runs to completion, mutates the owned draft, and returns the
/// view instructions for the rendering layer. There is no backend: a valid
/// submission is accepted locally and its payload handed back to the caller.
/// Once submitted, every handler except `reset` is a no-op.
#[derive(Debug, Clone)]
pub struct ReservationFlow {
    table: &'static AvailabilityTable,
    min_date: NaiveDate,
    draft: ReservationDraft,
    status: Option<DateStatus>,
    guests_confirmed: bool,
    submitted: bool,
}

impl ReservationFlow {
    /// `today` is the client's local date at page load.
    pub fn new(table: &'static AvailabilityTable, today: NaiveDate) -> Self {
        Self {
            table,
            min_date: min_reservation_date(today),
            draft: ReservationDraft::default(),
            status: None,
            guests_confirmed: false,
            submitted: false,
        }
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn status(&self) -> Option<DateStatus> {
        self.status
    }

    pub fn phase(&self) -> WizardPhase {
        if self.submitted {
            return WizardPhase::Submitted;
        }
        match (self.draft.selected_date, self.draft.selected_time) {
            (None, _) => WizardPhase::Initial,
            (Some(_), None) => WizardPhase::DateChosen,
            (Some(_), Some(_)) if self.guests_confirmed => WizardPhase::ReadyToSubmit,
            (Some(_), Some(_)) => WizardPhase::TimeChosen,
        }
    }

    /// View model for the `Initial` configuration
    pub fn initial_view(&self) -> ViewState {
        ViewState::new(GuestControls::for_count(self.draft.guest_count))
    }

    /// Handle a change of the date input. An empty value clears the selection.
    pub fn set_date(&mut self, raw: &str) -> Transition {
        if self.submitted {
            return Transition::none();
        }
        let raw = raw.trim();
        // Any date change invalidates the chosen time
        self.draft.selected_time = None;
        self.guests_confirmed = false;

        let mut updates = vec![ViewUpdate::DateValue(raw.to_string())];

        if raw.is_empty() {
            self.clear_date(&mut updates, None);
            return Transition { updates, focus: None };
        }

        let date = match parse_date_input(raw).filter(|date| *date >= self.min_date) {
            Some(date) => date,
            None => {
                let message = format!(
                    "Please choose a date from {} onward",
                    format_date_input(self.min_date)
                );
                self.clear_date(&mut updates, Some(message));
                return Transition { updates, focus: None };
            }
        };

        let status = self.table.classify(date);
        self.draft.selected_date = Some(date);
        self.status = Some(status);
        updates.push(ViewUpdate::ShowStatus(status));

        let focus = if status.is_bookable() {
            updates.push(ViewUpdate::DateValidity(None));
            updates.push(ViewUpdate::Show(WizardStep::Time));
            updates.push(ViewUpdate::RenderSlots(self.slot_views()));
            Some(FocusHint::Step(WizardStep::Time))
        } else {
            updates.push(ViewUpdate::DateValidity(Some(FULLY_BOOKED_VALIDITY.to_string())));
            updates.push(ViewUpdate::Hide(WizardStep::Time));
            updates.push(ViewUpdate::SelectSlot(None));
            None
        };

        updates.extend(hide_after_time());
        Transition { updates, focus }
    }

    /// Fresh slot controls in table order, none selected.
    pub fn slot_views(&self) -> Vec<SlotView> {
        self.table.time_slots.iter().map(SlotView::from_slot).collect()
    }

    /// Handle a click on a generated slot control.
    ///
    /// Booked or unknown slots, and clicks while no bookable date is chosen,
    /// leave everything unchanged.
    pub fn select_slot(&mut self, time: &str) -> Transition {
        if self.submitted || !self.status.is_some_and(|status| status.is_bookable()) {
            return Transition::none();
        }
        let Some(slot) = self.table.slot(time).filter(|slot| slot.available) else {
            return Transition::none();
        };

        self.draft.selected_time = Some(slot.time);
        // Guest count keeps its value but must be reconfirmed
        self.guests_confirmed = false;

        Transition {
            updates: vec![
                ViewUpdate::SelectSlot(Some(slot.time)),
                ViewUpdate::Show(WizardStep::Guests),
                ViewUpdate::Hide(WizardStep::Contact),
                ViewUpdate::Hide(WizardStep::Submit),
            ],
            focus: Some(FocusHint::Step(WizardStep::Guests)),
        }
    }

    /// Step the guest count by `delta` (+1 or -1). Out-of-range steps are no-ops.
    pub fn adjust_guest_count(&mut self, delta: i8) -> Transition {
        if self.submitted || self.draft.step_guests(delta).is_none() {
            return Transition::none();
        }
        self.confirm_guests()
    }

    /// Re-evaluate the stepper and reveal the contact and submit steps.
    pub fn confirm_guests(&mut self) -> Transition {
        if self.submitted {
            return Transition::none();
        }
        let controls = GuestControls::for_count(self.draft.guest_count);
        let mut updates = vec![ViewUpdate::Guests(controls)];
        let mut focus = None;
        if self.draft.has_guests() {
            self.guests_confirmed = true;
            updates.push(ViewUpdate::Show(WizardStep::Contact));
            updates.push(ViewUpdate::Show(WizardStep::Submit));
            focus = Some(FocusHint::Step(WizardStep::Submit));
        }
        Transition { updates, focus }
    }

    pub fn set_contact(&mut self, field: ContactField, value: String) -> Transition {
        if self.submitted {
            return Transition::none();
        }
        self.draft.contact.set(field, value.clone());
        Transition {
            updates: vec![ViewUpdate::Contact(field, value)],
            focus: None,
        }
    }

    /// Steps still missing before the draft can be submitted.
    pub fn missing_steps(&self) -> Vec<MissingStep> {
        let mut missing = Vec::new();
        if self.draft.selected_date.is_none() {
            missing.push(MissingStep::Date);
        }
        if self.draft.selected_time.is_none() {
            missing.push(MissingStep::Time);
        }
        if !self.draft.has_guests() {
            missing.push(MissingStep::Guests);
        }
        missing
    }

    /// Validate and accept the draft. Leaves all state untouched on error.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        let missing = self.missing_steps();
        let payload = match ReservationPayload::from_draft(&self.draft) {
            Some(payload) if missing.is_empty() => payload,
            _ => return Err(ValidationError { missing }),
        };

        self.submitted = true;
        Ok(Submission {
            payload,
            transition: Transition {
                updates: vec![ViewUpdate::ShowPanel(Panel::Confirmation)],
                focus: Some(FocusHint::Confirmation),
            },
        })
    }

    /// Start over with an empty draft and the form back on screen.
    pub fn reset(&mut self) -> Transition {
        self.draft = ReservationDraft::default();
        self.status = None;
        self.guests_confirmed = false;
        self.submitted = false;

        let mut updates = vec![
            ViewUpdate::ClearInputs,
            ViewUpdate::Guests(GuestControls::for_count(self.draft.guest_count)),
        ];
        updates.extend(WizardStep::ALL.into_iter().map(ViewUpdate::Hide));
        updates.push(ViewUpdate::HideStatus);
        updates.push(ViewUpdate::DateValidity(None));
        updates.push(ViewUpdate::SelectSlot(None));
        updates.push(ViewUpdate::ShowPanel(Panel::Form));

        Transition {
            updates,
            focus: Some(FocusHint::FlowTop),
        }
    }

    fn clear_date(&mut self, updates: &mut Vec<ViewUpdate>, validity: Option<String>) {
        self.draft.selected_date = None;
        self.status = None;
        updates.extend(WizardStep::ALL.into_iter().map(ViewUpdate::Hide));
        updates.push(ViewUpdate::HideStatus);
        updates.push(ViewUpdate::DateValidity(validity));
        updates.push(ViewUpdate::SelectSlot(None));
    }
}

fn hide_after_time() -> [ViewUpdate; 3] {
    [
        ViewUpdate::Hide(WizardStep::Guests),
        ViewUpdate::Hide(WizardStep::Contact),
        ViewUpdate::Hide(WizardStep::Submit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reservation::availability::MOCK_AVAILABILITY;

    fn flow() -> ReservationFlow {
        ReservationFlow::new(&MOCK_AVAILABILITY, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
    }

    #[test]
    fn test_new_flow_is_initial() {
        let flow = flow();
        assert_eq!(flow.phase(), WizardPhase::Initial);
        assert_eq!(flow.min_date(), NaiveDate::from_ymd_opt(2024, 12, 2).unwrap());
        assert_eq!(flow.draft().guest_count, 2);

        let view = flow.initial_view();
        assert!(view.visible_steps().is_empty());
        assert!(view.status.is_none());
        assert_eq!(view.panel, Panel::Form);
        assert_eq!(view.guests, GuestControls::for_count(2));
    }

    #[test]
    fn test_set_date_classifies() {
        let mut flow = flow();
        flow.set_date("2024-12-26");
        assert_eq!(flow.status(), Some(DateStatus::Available));
        flow.set_date("2024-12-30");
        assert_eq!(flow.status(), Some(DateStatus::Limited));
        flow.set_date("2024-12-31");
        assert_eq!(flow.status(), Some(DateStatus::FullyBooked));
        assert_eq!(flow.phase(), WizardPhase::DateChosen);
    }

    #[test]
    fn test_bookable_date_focuses_time_step() {
        let mut flow = flow();
        let transition = flow.set_date("2024-12-26");
        assert_eq!(transition.focus, Some(FocusHint::Step(WizardStep::Time)));
        assert!(transition.updates.contains(&ViewUpdate::DateValidity(None)));

        let transition = flow.set_date("2024-12-25");
        assert_eq!(transition.focus, None);
        assert!(transition
            .updates
            .contains(&ViewUpdate::DateValidity(Some("This date is fully booked".to_string()))));
    }

    #[test]
    fn test_dates_before_tomorrow_rejected() {
        let mut flow = flow();
        for raw in ["2024-12-01", "2024-11-30", "2023-06-15"] {
            let transition = flow.set_date(raw);
            assert!(flow.draft().selected_date.is_none(), "{} should be rejected", raw);
            assert_eq!(flow.phase(), WizardPhase::Initial);
            assert!(transition.updates.contains(&ViewUpdate::DateValidity(Some(
                "Please choose a date from 2024-12-02 onward".to_string()
            ))));
        }
        flow.set_date("2024-12-02");
        assert!(flow.draft().selected_date.is_some(), "Tomorrow is selectable");
    }

    #[test]
    fn test_malformed_date_treated_as_unset() {
        let mut flow = flow();
        flow.set_date("2024-12-26");
        flow.set_date("not-a-date");
        assert!(flow.draft().selected_date.is_none());
        assert!(flow.status().is_none());
    }

    #[test]
    fn test_select_slot_requires_bookable_date() {
        let mut flow = flow();
        assert!(flow.select_slot("09:00").is_empty(), "No date chosen yet");

        flow.set_date("2024-12-25");
        assert!(flow.select_slot("09:00").is_empty(), "Fully booked date");
        assert!(flow.draft().selected_time.is_none());
    }

    #[test]
    fn test_select_unknown_slot_is_noop() {
        let mut flow = flow();
        flow.set_date("2024-12-26");
        assert!(flow.select_slot("23:00").is_empty());
        assert!(flow.draft().selected_time.is_none());
    }

    #[test]
    fn test_adjust_guest_count_at_bounds() {
        let mut flow = flow();
        assert!(!flow.adjust_guest_count(-1).is_empty());
        assert_eq!(flow.draft().guest_count, 1);
        assert!(flow.adjust_guest_count(-1).is_empty(), "Decrement at 1 is a no-op");
        assert_eq!(flow.draft().guest_count, 1);
    }

    #[test]
    fn test_guest_change_reveals_contact_and_submit() {
        let mut flow = flow();
        let transition = flow.adjust_guest_count(1);
        assert_eq!(
            transition.updates,
            vec![
                ViewUpdate::Guests(GuestControls::for_count(3)),
                ViewUpdate::Show(WizardStep::Contact),
                ViewUpdate::Show(WizardStep::Submit),
            ]
        );
        assert_eq!(transition.focus, Some(FocusHint::Step(WizardStep::Submit)));
    }

    #[test]
    fn test_submit_reports_missing_steps() {
        let mut flow = flow();
        let err = flow.submit().unwrap_err();
        assert_eq!(err.missing, vec![MissingStep::Date, MissingStep::Time]);

        flow.set_date("2024-12-26");
        let err = flow.submit().unwrap_err();
        assert_eq!(err.missing, vec![MissingStep::Time]);
        assert_eq!(flow.phase(), WizardPhase::DateChosen, "Failed submit changes nothing");
    }

    #[test]
    fn test_set_contact_updates_draft() {
        let mut flow = flow();
        let transition = flow.set_contact(ContactField::Phone, "555-0100".to_string());
        assert_eq!(flow.draft().contact.phone, "555-0100");
        assert_eq!(
            transition.updates,
            vec![ViewUpdate::Contact(ContactField::Phone, "555-0100".to_string())]
        );
    }
}
