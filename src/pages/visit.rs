use crate::components::ReservationForm;
use leptos::*;

#[component]
pub fn VisitPage() -> impl IntoView {
    view! {
        <main class="container visit-page">
            <header>
                <h1>"Visit"</h1>
                <p class="tagline">"Find us, or save yourself a table"</p>
            </header>

            <section class="hours">
                <h2>"Hours"</h2>
                <p>"Open daily, 9:00\u{2013}18:00. Last seating at 17:30."</p>
            </section>

            <ReservationForm/>
        </main>
    }
}
