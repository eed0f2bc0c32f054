use crate::browser::{
    alert, apply_focus_hint, local_today, log_reservation, RESERVATION_SECTION_ID,
};
use crate::components::{ContactStep, DateStep, GuestStepper, ReservationSuccess, TimeSlotPicker};
use crate::reservation::{
    format_date_input, ContactField, Panel, ReservationFlow, Transition, WizardStep,
    MOCK_AVAILABILITY,
};
use leptos::*;

/// `display` value for a step container
pub(crate) fn step_display(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}

/// The reservation wizard.
///
/// Owns a single `ReservationFlow`; every DOM event is forwarded to it and the
/// returned transition is folded into one `ViewState` signal that the step
/// components render from.
#[component]
pub fn ReservationForm() -> impl IntoView {
    let flow = store_value(ReservationFlow::new(&MOCK_AVAILABILITY, local_today()));
    let min_date = flow.with_value(|f| format_date_input(f.min_date()));
    let (view_state, set_view_state) = create_signal(flow.with_value(ReservationFlow::initial_view));

    let dispatch = move |transition: Transition| {
        if transition.is_empty() {
            return;
        }
        set_view_state.update(|state| state.apply_all(&transition.updates));
        if let Some(hint) = transition.focus {
            apply_focus_hint(hint);
        }
    };

    let on_date = Callback::new(move |value: String| {
        if let Some(t) = flow.try_update_value(|f| f.set_date(&value)) {
            dispatch(t);
        }
    });
    let on_slot = Callback::new(move |time: &'static str| {
        if let Some(t) = flow.try_update_value(|f| f.select_slot(time)) {
            dispatch(t);
        }
    });
    let on_guests = Callback::new(move |delta: i8| {
        if let Some(t) = flow.try_update_value(|f| f.adjust_guest_count(delta)) {
            dispatch(t);
        }
    });
    let on_confirm_guests = Callback::new(move |_: ()| {
        if let Some(t) = flow.try_update_value(ReservationFlow::confirm_guests) {
            dispatch(t);
        }
    });
    let on_contact = Callback::new(move |(field, value): (ContactField, String)| {
        if let Some(t) = flow.try_update_value(|f| f.set_contact(field, value)) {
            dispatch(t);
        }
    });
    let on_new_reservation = Callback::new(move |_: ()| {
        if let Some(t) = flow.try_update_value(ReservationFlow::reset) {
            dispatch(t);
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match flow.try_update_value(|f| f.submit()) {
            Some(Ok(submission)) => {
                log_reservation(&submission.payload);
                dispatch(submission.transition);
            }
            Some(Err(err)) => alert(&err.to_string()),
            None => {}
        }
    };

    let step_visible =
        move |step: WizardStep| Signal::derive(move || view_state.with(|v| v.is_visible(step)));
    let panel_is = move |panel: Panel| move || view_state.with(|v| v.panel == panel);
    let form_shown = panel_is(Panel::Form);
    let submit_visible = step_visible(WizardStep::Submit);
    let submit_id = WizardStep::Submit.element_id();
    // Only changes when slots are regenerated or the selection moves
    let slots = create_memo(move |_| view_state.with(|v| v.slots.clone()));

    view! {
        <section id=RESERVATION_SECTION_ID class="reservation">
            <h2>"Reserve a Table"</h2>
            <form
                id="reservation-form"
                class="reservation-form"
                style:display=move || step_display(form_shown())
                on:submit=on_submit
            >
                <DateStep
                    min_date=min_date
                    value=Signal::derive(move || view_state.with(|v| v.date_value.clone()))
                    status=Signal::derive(move || view_state.with(|v| v.status))
                    validity=Signal::derive(move || view_state.with(|v| v.date_validity.clone()))
                    on_change=on_date
                />
                <TimeSlotPicker
                    visible=step_visible(WizardStep::Time)
                    slots=slots
                    on_select=on_slot
                />
                <GuestStepper
                    visible=step_visible(WizardStep::Guests)
                    controls=Signal::derive(move || view_state.with(|v| v.guests))
                    on_step=on_guests
                    on_confirm=on_confirm_guests
                />
                <ContactStep
                    visible=step_visible(WizardStep::Contact)
                    contact=Signal::derive(move || view_state.with(|v| v.contact.clone()))
                    on_input=on_contact
                />
                <div
                    id=submit_id
                    class="form-step submit-section"
                    style:display=move || step_display(submit_visible.get())
                >
                    <button type="submit" class="submit-button">"Request Reservation"</button>
                </div>
            </form>
            <ReservationSuccess
                visible=Signal::derive(panel_is(Panel::Confirmation))
                on_new=on_new_reservation
            />
        </section>
    }
}
