//! Lost Item Form Component
//!
//! Submission form for lost items, with optional photo.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::{FormIntake, LostItemInput, RecordKind};

use crate::components::{FormMessageLine, FormSignals, PhotoPicker, SelectField, SubmitButton, TextField};
use crate::context::use_site_context;
use crate::models::CATEGORY_PRESETS;

#[component]
pub fn LostForm() -> impl IntoView {
    let ctx = use_site_context();

    let form = FormSignals::<LostItemInput>::new();
    let draft = form.draft;
    let photo_url = RwSignal::new(String::new());
    let photo_reset = RwSignal::new(0u32);
    let is_invalid = move |field: &'static str| form.is_invalid(field);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mut input) = form.begin() else { return };
        input.photo_url = photo_url.get_untracked();

        let ctx = ctx.clone();
        spawn_local(async move {
            TimeoutFuture::new(ctx.config.submit_delay_ms).await;

            // The report is stored even if the page was switched meanwhile
            let outcome = FormIntake::new(&ctx.store).submit(&input);
            if outcome.is_ok() {
                ctx.records_changed();
            }
            if form.finish(RecordKind::Lost, &outcome) && outcome.is_ok() {
                photo_url.try_update(|url| url.clear());
                photo_reset.try_update(|v| *v += 1);
            }
        });
    };

    view! {
        <section class="form-page">
            <h1>"Report a Lost Item"</h1>
            <p class="subtle">"Fields marked * are required. Reports are stored only in this browser."</p>
            <form id="lostForm" class="report-form" novalidate=true on:submit=on_submit>
                <TextField
                    id="itemName" label="Item name" required=true placeholder="e.g. Blue water bottle"
                    value=Signal::derive(move || draft.with(|d| d.item_name.clone()))
                    on_input=move |v: String| draft.update(|d| d.item_name = v)
                    invalid=is_invalid("itemName")
                />
                <SelectField
                    id="category" label="Category" required=true options=CATEGORY_PRESETS
                    value=Signal::derive(move || draft.with(|d| d.category.clone()))
                    on_change=move |v: String| draft.update(|d| d.category = v)
                    invalid=is_invalid("category")
                />
                <TextField
                    id="lastSeen" label="Last seen at" required=true placeholder="Building, room or area"
                    value=Signal::derive(move || draft.with(|d| d.last_seen.clone()))
                    on_input=move |v: String| draft.update(|d| d.last_seen = v)
                    invalid=is_invalid("lastSeen")
                />
                <TextField
                    id="dateLost" label="Date lost" input_type="date" required=true
                    value=Signal::derive(move || draft.with(|d| d.date_lost.clone()))
                    on_input=move |v: String| draft.update(|d| d.date_lost = v)
                    invalid=is_invalid("dateLost")
                />
                <TextField
                    id="description" label="Description" multiline=true required=true
                    value=Signal::derive(move || draft.with(|d| d.description.clone()))
                    on_input=move |v: String| draft.update(|d| d.description = v)
                    invalid=is_invalid("description")
                />
                <TextField
                    id="uniqueMarks" label="Unique marks" placeholder="Stickers, scratches, engraving"
                    value=Signal::derive(move || draft.with(|d| d.unique_marks.clone()))
                    on_input=move |v: String| draft.update(|d| d.unique_marks = v)
                    invalid=is_invalid("uniqueMarks")
                />
                <TextField
                    id="contact" label="Contact" input_type="email" required=true placeholder="you@example.com"
                    value=Signal::derive(move || draft.with(|d| d.contact.clone()))
                    on_input=move |v: String| draft.update(|d| d.contact = v)
                    invalid=is_invalid("contact")
                />
                <PhotoPicker photo_url=photo_url reset=photo_reset.read_only() />
                <SubmitButton label="Submit Lost Report" submitting=form.submitting.read_only() />
                <FormMessageLine message=form.message.read_only() />
            </form>
        </section>
    }
}
