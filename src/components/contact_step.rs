use crate::components::reservation_form::step_display;
use crate::reservation::{ContactDetails, ContactField, WizardStep};
use leptos::*;

#[component]
pub fn ContactStep(
    visible: Signal<bool>,
    contact: Signal<ContactDetails>,
    on_input: Callback<(ContactField, String)>,
) -> impl IntoView {
    let value_of = move |field: ContactField| move || contact.with(|c| c.get(field).to_string());
    let input_for =
        move |field: ContactField| move |ev: ev::Event| on_input.call((field, event_target_value(&ev)));

    let step_id = WizardStep::Contact.element_id();

    view! {
        <div
            id=step_id
            class="form-step contact-step"
            style:display=move || step_display(visible.get())
        >
            <div class="control-group">
                <label for="reservation-name">"Name"</label>
                <input
                    type="text"
                    id="reservation-name"
                    name="name"
                    autocomplete="name"
                    prop:value=value_of(ContactField::Name)
                    on:input=input_for(ContactField::Name)
                />
            </div>
            <div class="control-group">
                <label for="reservation-email">"Email"</label>
                <input
                    type="email"
                    id="reservation-email"
                    name="email"
                    autocomplete="email"
                    prop:value=value_of(ContactField::Email)
                    on:input=input_for(ContactField::Email)
                />
            </div>
            <div class="control-group">
                <label for="reservation-phone">"Phone"</label>
                <input
                    type="tel"
                    id="reservation-phone"
                    name="phone"
                    autocomplete="tel"
                    prop:value=value_of(ContactField::Phone)
                    on:input=input_for(ContactField::Phone)
                />
            </div>
            <div class="control-group">
                <label for="reservation-notes">"Notes"</label>
                <textarea
                    id="reservation-notes"
                    name="notes"
                    rows="3"
                    placeholder="Allergies, high chair, special occasion..."
                    prop:value=value_of(ContactField::Notes)
                    on:input=input_for(ContactField::Notes)
                ></textarea>
            </div>
        </div>
    }
}
