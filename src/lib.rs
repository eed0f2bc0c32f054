pub mod browser;
pub mod components;
pub mod pages;
pub mod reservation;

use components::NavBar;
use leptos::*;
use leptos_router::*;
use pages::{HomePage, NotFoundPage, VisitPage};
use wasm_bindgen::prelude::*;

/// Root component with routing
#[component]
fn Root() -> impl IntoView {
    view! {
        <Router>
            <NavBar/>
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/visit" view=VisitPage/>
                <Route path="/*" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(Root);
}
