//! Submit Button Component

use leptos::prelude::*;

/// Submit button that shows a busy label while a submission is pending
#[component]
pub fn SubmitButton(label: &'static str, submitting: ReadSignal<bool>) -> impl IntoView {
    view! {
        <button type="submit" class="btn primary" disabled=move || submitting.get()>
            {move || if submitting.get() { "Submitting..." } else { label }}
        </button>
    }
}
