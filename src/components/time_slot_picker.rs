use crate::components::reservation_form::step_display;
use crate::reservation::{SlotView, WizardStep};
use leptos::*;

/// Button identity. Selection only toggles a class, so it is left out and a
/// click never replaces the focused button.
fn slot_key(slot: &SlotView) -> (&'static str, bool, bool) {
    (slot.time, slot.booked, slot.limited)
}

#[component]
pub fn TimeSlotPicker(
    visible: Signal<bool>,
    slots: Memo<Vec<SlotView>>,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    let step_id = WizardStep::Time.element_id();

    view! {
        <div
            id=step_id
            class="form-step time-step"
            style:display=move || step_display(visible.get())
        >
            <span class="step-label">"Time"</span>
            <div id="time-slots" class="time-slots" role="group" aria-label="Available times">
                <For
                    each=move || slots.get()
                    key=slot_key
                    children=move |slot: SlotView| {
                        let time = slot.time;
                        let booked = slot.booked;
                        let is_selected = move || {
                            slots.with(|all| all.iter().any(|s| s.time == time && s.selected))
                        };
                        let class = move || {
                            SlotView { selected: is_selected(), ..slot.clone() }.class_name()
                        };
                        view! {
                            <button
                                type="button"
                                class=class
                                disabled=booked
                                aria-pressed=move || is_selected().to_string()
                                on:click=move |_| on_select.call(time)
                            >
                                {time}
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selecting_keeps_button_identity() {
        let slot = SlotView { time: "10:30", booked: false, limited: true, selected: false };
        let picked = SlotView { selected: true, ..slot.clone() };
        assert_eq!(slot_key(&slot), slot_key(&picked));

        let other = SlotView { time: "11:00", ..slot.clone() };
        assert_ne!(slot_key(&slot), slot_key(&other));
    }
}
