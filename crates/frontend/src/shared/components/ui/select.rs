use leptos::prelude::*;

/// Native select with a label and a leading "nothing chosen" option.
///
/// The placeholder option has the empty value; `on_change` receives the raw
/// option value, so an empty string means the placeholder was picked.
#[component]
pub fn Select(
    /// ID for the select element, also used by the label
    #[prop(into)]
    id: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Caption of the empty-value option
    #[prop(into)]
    placeholder: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Options: (value, caption) pairs, values must be unique and non-empty
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Change event handler
    on_change: Callback<String>,
    /// Disabled state
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__group">
            <label class="form__label" for=label_for>
                {label}
            </label>
            <select
                id=id
                class="form__select"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>
                    {placeholder}
                </option>
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, caption)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {caption}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
