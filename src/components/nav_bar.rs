use leptos::*;
use leptos_router::{use_location, A};

const NAV_LINKS: &[(&str, &str)] = &[("/", "Home"), ("/visit", "Visit & Reserve")];

/// Class for a nav link given the current path.
///
/// Home only matches exactly; other links also match their sub-paths.
pub fn link_class(current: &str, href: &str) -> &'static str {
    if current == href || (href != "/" && current.starts_with(href)) {
        "nav-link active"
    } else {
        "nav-link"
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu_open, set_menu_open) = create_signal(false);

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|&(href, label)| {
                view! { <A href=href class=move || link_class(&pathname.get(), href)>{label}</A> }
            })
            .collect_view()
    };

    let mobile_links = move || {
        NAV_LINKS
            .iter()
            .map(|&(href, label)| {
                view! {
                    <a
                        href=href
                        class=move || link_class(&pathname.get(), href)
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="site-nav">
            <div class="site-nav-inner">
                <A href="/" class="nav-brand">"Bistro"</A>
                <div class="nav-links">{links}</div>
                <button
                    class="hamburger"
                    aria-label="Menu"
                    aria-controls="mobile-menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div id="mobile-menu" class="mobile-menu" class:open=move || menu_open.get()>
                {mobile_links}
            </div>
        </nav>
    }
}
