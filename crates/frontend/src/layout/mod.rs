pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Application shell: navigation bar on top, routed page below.
///
/// ```text
/// +------------------------------------------+
/// |  Dashboard | Vendors | Product Categories |
/// +------------------------------------------+
/// |              routed page                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="layout-container">
            <Navbar />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
