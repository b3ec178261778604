use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="404" subtitle=Signal::derive(|| "Page not found".to_string()) />
            <div class="page__content">
                <A href="/">"Back to the dashboard"</A>
            </div>
        </PageFrame>
    }
}
