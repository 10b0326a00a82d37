//! Form Field Components
//!
//! Labelled inputs shared by the lost and found forms. A field marked
//! invalid gets the `input-error` class until the next submission.

use leptos::prelude::*;

fn field_class(invalid: bool) -> &'static str {
    if invalid { "input-error" } else { "" }
}

/// Labelled text, date or email input, or a textarea when `multiline`
#[component]
pub fn TextField(
    /// Element id, also the record field name
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] multiline: bool,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] invalid: Signal<bool>,
) -> impl IntoView {
    let control = if multiline {
        view! {
            <textarea
                id=id
                name=id
                rows="3"
                placeholder=placeholder
                class=move || field_class(invalid.get())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                name=id
                type=input_type
                placeholder=placeholder
                class=move || field_class(invalid.get())
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=id>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            {control}
        </div>
    }
}

/// Labelled select over fixed options, with an empty placeholder entry
#[component]
pub fn SelectField(
    id: &'static str,
    label: &'static str,
    options: &'static [&'static str],
    #[prop(optional)] required: bool,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(into)] invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <select
                id=id
                name=id
                class=move || field_class(invalid.get())
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"Select category"</option>
                {options.iter().map(|opt| view! { <option value=*opt>{*opt}</option> }).collect_view()}
            </select>
        </div>
    }
}
