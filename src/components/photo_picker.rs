//! Photo Picker Component
//!
//! File input with a live preview for the lost item form. The chosen image
//! is read into a data URI which becomes the record's photo.

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::LatestWins;
use wasm_bindgen::JsCast;

use crate::photo::{read_as_data_url, selected_file};

/// Photo input bound to `photo_url`
///
/// `reset` is bumped by the form after a successful submission to clear the
/// input and drop any read still in flight.
#[component]
pub fn PhotoPicker(photo_url: RwSignal<String>, reset: ReadSignal<u32>) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();
    let reads = Arc::new(LatestWins::new());

    let reads_on_reset = reads.clone();
    Effect::new(move |_| {
        reset.track();
        reads_on_reset.invalidate();
        if let Some(input) = input_ref.get_untracked() {
            input.set_value("");
        }
    });

    let on_change = move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() else { return };
        let Some(file) = selected_file(input) else {
            // Selection cleared
            reads.invalidate();
            photo_url.set(String::new());
            return;
        };

        let ticket = reads.begin();
        let reads = reads.clone();
        spawn_local(async move {
            match read_as_data_url(&file).await {
                Ok(url) if reads.is_current(ticket) => {
                    // The form may have been unmounted during the read
                    photo_url.try_update(|current| *current = url);
                }
                Ok(_) => log::debug!("[PHOTO] Discarding superseded read of {}", file.name()),
                Err(e) => log::warn!("[PHOTO] Could not read {}: {:?}", file.name(), e),
            }
        });
    };

    view! {
        <div class="form-field">
            <label for="photo">"Photo (optional)"</label>
            <input node_ref=input_ref id="photo" name="photo" type="file" accept="image/*" on:change=on_change />
            <div class="photo-preview-wrap" hidden=move || photo_url.get().is_empty()>
                <img class="photo-preview" alt="Selected photo preview" src=move || photo_url.get() />
            </div>
        </div>
    }
}
