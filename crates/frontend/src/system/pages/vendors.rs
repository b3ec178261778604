use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;

/// Placeholder until vendor pages exist
#[component]
pub fn VendorsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="vendors--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Vendors" />
            <div class="page__content">
                <p>"Vendor profiles are not available yet."</p>
            </div>
        </PageFrame>
    }
}
