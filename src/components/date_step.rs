use crate::reservation::DateStatus;
use leptos::*;

/// Class list for the availability indicator
fn status_class(status: Option<DateStatus>) -> String {
    match status {
        Some(status) => format!("date-status show {}", status.css_class()),
        None => "date-status".to_string(),
    }
}

#[component]
pub fn DateStep(
    /// Earliest selectable date, `YYYY-MM-DD`
    min_date: String,
    value: Signal<String>,
    status: Signal<Option<DateStatus>>,
    /// Custom validity message for native form validation
    validity: Signal<Option<String>>,
    on_change: Callback<String>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        let message = validity.get();
        if let Some(input) = input_ref.get() {
            input.set_custom_validity(message.as_deref().unwrap_or(""));
        }
    });

    view! {
        <div class="form-step date-step">
            <label for="reservation-date">"Date"</label>
            <input
                type="date"
                id="reservation-date"
                name="date"
                required
                min=min_date
                node_ref=input_ref
                prop:value=move || value.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            />
            <p id="date-status" class=move || status_class(status.get()) aria-live="polite">
                {move || status.get().map(|s| s.message())}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert_eq!(status_class(None), "date-status");
        assert_eq!(
            status_class(Some(DateStatus::FullyBooked)),
            "date-status show unavailable"
        );
        assert_eq!(status_class(Some(DateStatus::Limited)), "date-status show limited");
    }
}
