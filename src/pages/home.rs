use leptos::*;
use leptos_router::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="container">
            <header>
                <h1>"Bistro"</h1>
                <p class="tagline">"Seasonal plates, slow mornings, good coffee"</p>
            </header>

            <section class="intro">
                <h2>"Breakfast & Lunch"</h2>
                <p>
                    "We cook from 9 in the morning until late afternoon, every day. "
                    "Walk-ins are always welcome, but tables go quickly on weekends and holidays."
                </p>
                <p class="cta">
                    <A href="/visit" class="cta-button">"Reserve a table"</A>
                </p>
            </section>

            <footer>
                <p>"\u{a9} 2025"</p>
            </footer>
        </main>
    }
}
