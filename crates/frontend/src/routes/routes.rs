use crate::dashboards::d001_category_charts::ui::dashboard::CategoryChartsDashboard;
use crate::domain::a001_vendor_product::ui::list::ProductCategoriesList;
use crate::layout::Shell;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::vendors::VendorsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Client-side routes; unknown paths render the not-found page inside the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=CategoryChartsDashboard />
                    <Route path=path!("/vendors") view=VendorsPage />
                    <Route path=path!("/product-categories") view=ProductCategoriesList />
                </Routes>
            </Shell>
        </Router>
    }
}
