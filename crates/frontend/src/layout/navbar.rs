use leptos::prelude::*;
use leptos_router::components::A;

/// Route path and caption of every page reachable from the navigation bar
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("/", "Dashboard"),
    ("/vendors", "Vendors"),
    ("/product-categories", "Product Categories"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {NAV_ITEMS.into_iter().map(|(href, title)| {
                    view! {
                        <li>
                            <A href=href exact=true>{title}</A>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
