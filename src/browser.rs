use crate::reservation::{FocusHint, ReservationPayload};
use chrono::NaiveDate;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Let a freshly revealed step lay out before scrolling to it
pub const STEP_SCROLL_DELAY_MS: i32 = 100;

pub const RESERVATION_SECTION_ID: &str = "reservation";
pub const CONFIRMATION_ID: &str = "reservation-success";

/// Log a warning message to the browser console.
fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// The client's local calendar date.
///
/// Falls back to the epoch if the browser reports something chrono can't
/// represent, which only widens the selectable range.
pub fn local_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Blocking notice, e.g. for an incomplete submission
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Log a submitted reservation. There is no backend yet; this is where the
/// payload would be handed to a reservation service.
pub fn log_reservation(payload: &ReservationPayload) {
    match serde_json::to_string(payload) {
        Ok(json) => web_sys::console::log_2(&"Reservation submitted:".into(), &json.into()),
        Err(e) => log_warning(&format!("Reservation: failed to serialize payload: {}", e)),
    }
}

/// Smoothly scroll the element with `id` into view.
fn scroll_into_view(id: &str, block: ScrollLogicalPosition) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    let Some(element) = element else {
        log_warning(&format!("Reservation: no element #{} to scroll to", id));
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(block);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll after a delay (in ms). Fire-and-forget.
fn scroll_into_view_after_delay(id: &'static str, block: ScrollLogicalPosition, delay_ms: i32) {
    if let Some(window) = web_sys::window() {
        let closure = Closure::once(Box::new(move || {
            scroll_into_view(id, block);
        }) as Box<dyn FnOnce()>);

        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        );
        closure.forget();
    }
}

/// Carry out a flow focus hint.
pub fn apply_focus_hint(hint: FocusHint) {
    match hint {
        FocusHint::Step(step) => scroll_into_view_after_delay(
            step.element_id(),
            ScrollLogicalPosition::Nearest,
            STEP_SCROLL_DELAY_MS,
        ),
        FocusHint::Confirmation => {
            scroll_into_view(CONFIRMATION_ID, ScrollLogicalPosition::Nearest)
        }
        FocusHint::FlowTop => scroll_into_view(RESERVATION_SECTION_ID, ScrollLogicalPosition::Start),
    }
}
