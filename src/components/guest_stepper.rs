use crate::components::reservation_form::step_display;
use crate::reservation::{GuestControls, WizardStep, MAX_GUESTS, MIN_GUESTS};
use leptos::*;

#[component]
pub fn GuestStepper(
    visible: Signal<bool>,
    controls: Signal<GuestControls>,
    on_step: Callback<i8>,
    /// Keep the current count and move on
    on_confirm: Callback<()>,
) -> impl IntoView {
    let step_id = WizardStep::Guests.element_id();

    view! {
        <div
            id=step_id
            class="form-step guests-step"
            style:display=move || step_display(visible.get())
        >
            <label for="guest-count">"Guests"</label>
            <div class="guest-stepper">
                <button
                    type="button"
                    id="decrease-guests"
                    aria-label="Fewer guests"
                    disabled=move || !controls.get().can_decrease
                    on:click=move |_| on_step.call(-1)
                >
                    "\u{2212}"
                </button>
                <input
                    type="number"
                    id="guest-count"
                    name="guests"
                    readonly
                    min=MIN_GUESTS.to_string()
                    max=MAX_GUESTS.to_string()
                    prop:value=move || controls.get().count.to_string()
                />
                <button
                    type="button"
                    id="increase-guests"
                    aria-label="More guests"
                    disabled=move || !controls.get().can_increase
                    on:click=move |_| on_step.call(1)
                >
                    "+"
                </button>
            </div>
            <button type="button" class="step-continue" on:click=move |_| on_confirm.call(())>
                "Continue"
            </button>
        </div>
    }
}
