//! Form Store
//!
//! Holds the form view-model in a Leptos reactive_stores `Store`.
//! All writes go through `reduce`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::form::{reduce, FormEvent, FormModel};
use crate::models::SubmissionPayload;

/// Type alias for the store
pub type FormStore = Store<FormModel>;

pub fn new_form_store() -> FormStore {
    Store::new(FormModel::default())
}

/// Replace the model with `reduce(model, event)`
pub fn dispatch(store: FormStore, event: FormEvent) {
    let mut model = store.write();
    let current = std::mem::take(&mut *model);
    *model = reduce(current, event);
}

/// Enter the in-flight state and freeze the payload.
///
/// Returns `None` without touching the model while another submission is
/// still in flight, so at most one request is outstanding.
pub fn begin_submission(store: FormStore) -> Option<SubmissionPayload> {
    if !store.read_untracked().can_submit() {
        return None;
    }
    let mut model = store.write();
    let current = std::mem::take(&mut *model);
    *model = reduce(current, FormEvent::SubmitStarted);
    Some(model.fields.to_payload())
}
