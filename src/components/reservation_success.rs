use crate::browser::CONFIRMATION_ID;
use crate::components::reservation_form::step_display;
use leptos::*;

#[component]
pub fn ReservationSuccess(visible: Signal<bool>, on_new: Callback<()>) -> impl IntoView {
    view! {
        <div
            id=CONFIRMATION_ID
            class="reservation-success"
            style:display=move || step_display(visible.get())
        >
            <h3>"Request received"</h3>
            <p>"Thanks! We'll confirm your table by email shortly."</p>
            <button
                type="button"
                id="new-reservation"
                class="reset-button"
                on:click=move |_| on_new.call(())
            >
                "Make another reservation"
            </button>
        </div>
    }
}
