//! Form Message Component
//!
//! Inline success/warning line under a submission form.

use leptos::prelude::*;
use lost_found_core::FormMessage;

#[component]
pub fn FormMessageLine(message: ReadSignal<Option<FormMessage>>) -> impl IntoView {
    view! {
        <p
            class=move || message.get().map(|m| m.class()).unwrap_or_else(|| "form-msg".to_string())
            role="status"
        >
            {move || message.get().map(|m| m.text).unwrap_or_default()}
        </p>
    }
}
