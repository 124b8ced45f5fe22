//! Form Context
//!
//! Shared state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TaskApi;
use crate::form::FormEvent;
use crate::models::Field;
use crate::store::{self, FormStore};
use crate::submit::submit_task;

/// Form store plus the API client used to submit it
#[derive(Clone)]
pub struct FormContext {
    pub store: FormStore,
    api: Arc<dyn TaskApi>,
}

impl FormContext {
    pub fn new(store: FormStore, api: Arc<dyn TaskApi>) -> Self {
        Self { store, api }
    }

    /// Record a raw input value
    pub fn set_field(&self, field: Field, value: String) {
        store::dispatch(self.store, FormEvent::FieldChanged { field, value });
    }

    /// Submit the current fields. Ignored while a submission is in flight.
    pub fn submit(&self) {
        let Some(payload) = store::begin_submission(self.store) else {
            log::debug!("[TaskForm] submission already in flight, ignoring");
            return;
        };
        let store = self.store;
        let api = Arc::clone(&self.api);
        spawn_local(async move {
            let outcome = submit_task(api.as_ref(), &payload).await;
            store::dispatch(store, FormEvent::SubmitSettled(outcome));
        });
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
