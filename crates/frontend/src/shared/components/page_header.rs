use leptos::prelude::*;

/// Page title block with optional subtitle
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h2 class="page-header__title">{title}</h2>
                {subtitle.map(|subtitle| view! {
                    <div class="page-header__subtitle">{move || subtitle.get()}</div>
                })}
            </div>
        </div>
    }
}
