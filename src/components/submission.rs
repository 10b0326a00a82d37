//! Form Submission State
//!
//! Signals shared by the submission forms. A submission resumes after the
//! cosmetic delay, when the page may already have been switched and the
//! form's signals disposed. Everything touched after that point goes through
//! the `try_*` accessors, so an unmounted form is skipped rather than read.

use leptos::prelude::*;
use lost_found_core::{FormMessage, IntakeResult, RecordKind};

/// Draft values, error marks, status line and busy flag of one form
pub struct FormSignals<I: Send + Sync + 'static> {
    pub draft: RwSignal<I>,
    /// Persisted names of fields to mark invalid
    pub invalid: RwSignal<Vec<&'static str>>,
    pub message: RwSignal<Option<FormMessage>>,
    pub submitting: RwSignal<bool>,
}

impl<I: Send + Sync + 'static> Clone for FormSignals<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: Send + Sync + 'static> Copy for FormSignals<I> {}

impl<I: Clone + Default + Send + Sync + 'static> FormSignals<I> {
    /// Create the signals under the current owner
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(I::default()),
            invalid: RwSignal::new(Vec::new()),
            message: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn is_invalid(&self, field: &'static str) -> Signal<bool> {
        let invalid = self.invalid;
        Signal::derive(move || invalid.with(|f| f.contains(&field)))
    }

    /// Mark the form busy and take a snapshot of the draft.
    ///
    /// Returns `None` while an earlier submission is still pending.
    pub fn begin(&self) -> Option<I> {
        if self.submitting.try_get_untracked()? {
            return None;
        }
        let snapshot = self.draft.try_get_untracked()?;
        self.submitting.try_update(|busy| *busy = true)?;
        Some(snapshot)
    }

    /// Show the outcome of a submission.
    ///
    /// A success clears the draft and the marks; a rejection marks the
    /// missing fields and keeps the values. Returns `false`, touching
    /// nothing, when the form was unmounted while the submission was pending.
    pub fn finish<R>(&self, kind: RecordKind, outcome: &IntakeResult<R>) -> bool {
        let message = FormMessage::for_outcome(kind, outcome);
        if self.message.try_update(|m| *m = Some(message)).is_none() {
            log::debug!("[FORM] {} form closed before its submission finished", kind.label());
            return false;
        }

        match outcome {
            Ok(_) => {
                self.draft.try_update(|d| *d = I::default());
                self.invalid.try_update(|f| f.clear());
            }
            Err(e) => {
                let missing = e.missing_fields().to_vec();
                self.invalid.try_update(|f| *f = missing);
            }
        }
        self.submitting.try_update(|busy| *busy = false);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lost_found_core::{FoundItemInput, IntakeError, LostItemInput, MessageKind, StoreError};

    #[test]
    fn test_finish_after_unmount_is_noop() {
        let page = Owner::new();
        let form = page.with(FormSignals::<LostItemInput>::new);
        page.with(|| form.draft.update(|d| d.item_name = "Umbrella".to_string()));

        let snapshot = form.begin().unwrap();
        assert_eq!(snapshot.item_name, "Umbrella");

        // Page switched while the submit delay was running
        page.cleanup();

        let outcome: IntakeResult<()> = Ok(());
        assert!(!form.finish(RecordKind::Lost, &outcome));
        assert!(form.begin().is_none());
    }

    #[test]
    fn test_success_resets_form() {
        let page = Owner::new();
        page.with(|| {
            let form = FormSignals::<FoundItemInput>::new();
            form.draft.update(|d| d.contact = "desk@example.com".to_string());
            form.invalid.set(vec!["keptAt"]);

            let snapshot = form.begin().unwrap();
            assert_eq!(snapshot.contact, "desk@example.com");
            assert!(form.submitting.get_untracked());

            let outcome: IntakeResult<()> = Ok(());
            assert!(form.finish(RecordKind::Found, &outcome));
            assert_eq!(form.draft.get_untracked(), FoundItemInput::default());
            assert!(form.invalid.get_untracked().is_empty());
            assert!(!form.submitting.get_untracked());
            assert_eq!(form.message.get_untracked().map(|m| m.kind), Some(MessageKind::Success));
        });
    }

    #[test]
    fn test_rejection_marks_fields_and_keeps_values() {
        let page = Owner::new();
        page.with(|| {
            let form = FormSignals::<FoundItemInput>::new();
            form.draft.update(|d| d.notes = "blue lanyard".to_string());
            form.begin().unwrap();

            let outcome: IntakeResult<()> = Err(IntakeError::MissingFields(vec!["category", "contact"]));
            assert!(form.finish(RecordKind::Found, &outcome));
            assert_eq!(form.invalid.get_untracked(), vec!["category", "contact"]);
            assert_eq!(form.draft.get_untracked().notes, "blue lanyard");
            assert!(!form.submitting.get_untracked());
            assert!(form.is_invalid("contact").get_untracked());
            assert!(!form.is_invalid("notes").get_untracked());

            // A write failure keeps the values but clears stale marks
            form.begin().unwrap();
            let outcome: IntakeResult<()> = Err(IntakeError::Store(StoreError::Write("quota".to_string())));
            assert!(form.finish(RecordKind::Found, &outcome));
            assert!(form.invalid.get_untracked().is_empty());
            assert_eq!(form.draft.get_untracked().notes, "blue lanyard");
            assert_eq!(form.message.get_untracked().map(|m| m.kind), Some(MessageKind::Error));
        });
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let page = Owner::new();
        page.with(|| {
            let form = FormSignals::<LostItemInput>::new();
            assert!(form.begin().is_some());
            assert!(form.begin().is_none());

            let outcome: IntakeResult<()> = Ok(());
            form.finish(RecordKind::Lost, &outcome);
            assert!(form.begin().is_some());
        });
    }
}
