//! Found Item Form Component
//!
//! Submission form for items someone found and is holding.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lost_found_core::{FormIntake, FoundItemInput, RecordKind};

use crate::components::{FormMessageLine, FormSignals, SelectField, SubmitButton, TextField};
use crate::context::use_site_context;
use crate::models::CATEGORY_PRESETS;

#[component]
pub fn FoundForm() -> impl IntoView {
    let ctx = use_site_context();

    let form = FormSignals::<FoundItemInput>::new();
    let draft = form.draft;
    let is_invalid = move |field: &'static str| form.is_invalid(field);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = form.begin() else { return };

        let ctx = ctx.clone();
        spawn_local(async move {
            TimeoutFuture::new(ctx.config.submit_delay_ms).await;

            let outcome = FormIntake::new(&ctx.store).submit(&input);
            if outcome.is_ok() {
                ctx.records_changed();
            }
            form.finish(RecordKind::Found, &outcome);
        });
    };

    // Element ids carry an "f" prefix where the lost form uses the same name
    view! {
        <section class="form-page">
            <h1>"Report a Found Item"</h1>
            <p class="subtle">"Fields marked * are required. Reports are stored only in this browser."</p>
            <form id="foundForm" class="report-form" novalidate=true on:submit=on_submit>
                <SelectField
                    id="fCategory" label="Category" required=true options=CATEGORY_PRESETS
                    value=Signal::derive(move || draft.with(|d| d.category.clone()))
                    on_change=move |v: String| draft.update(|d| d.category = v)
                    invalid=is_invalid("category")
                />
                <TextField
                    id="foundLocation" label="Found at" required=true placeholder="Building, room or area"
                    value=Signal::derive(move || draft.with(|d| d.found_location.clone()))
                    on_input=move |v: String| draft.update(|d| d.found_location = v)
                    invalid=is_invalid("foundLocation")
                />
                <TextField
                    id="dateFound" label="Date found" input_type="date" required=true
                    value=Signal::derive(move || draft.with(|d| d.date_found.clone()))
                    on_input=move |v: String| draft.update(|d| d.date_found = v)
                    invalid=is_invalid("dateFound")
                />
                <TextField
                    id="keptAt" label="Currently kept at" required=true placeholder="With finder, department office..."
                    value=Signal::derive(move || draft.with(|d| d.kept_at.clone()))
                    on_input=move |v: String| draft.update(|d| d.kept_at = v)
                    invalid=is_invalid("keptAt")
                />
                <TextField
                    id="fContact" label="Contact" input_type="email" required=true placeholder="you@example.com"
                    value=Signal::derive(move || draft.with(|d| d.contact.clone()))
                    on_input=move |v: String| draft.update(|d| d.contact = v)
                    invalid=is_invalid("contact")
                />
                <TextField
                    id="notes" label="Notes" multiline=true placeholder="Colour, brand, anything that helps the owner"
                    value=Signal::derive(move || draft.with(|d| d.notes.clone()))
                    on_input=move |v: String| draft.update(|d| d.notes = v)
                    invalid=is_invalid("notes")
                />
                <SubmitButton label="Submit Found Report" submitting=form.submitting.read_only() />
                <FormMessageLine message=form.message.read_only() />
            </form>
        </section>
    }
}
