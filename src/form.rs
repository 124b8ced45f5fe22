//! Form View-Model
//!
//! Field values plus the two transient UI flags, updated by a pure reducer.

use reactive_stores::Store;

use crate::models::{Field, FormState};
use crate::submit::SubmitOutcome;

pub const SUBMIT_LABEL: &str = "Create Task";
pub const SUBMITTING_LABEL: &str = "Creating...";

/// Everything the task form renders
#[derive(Debug, Clone, Default, PartialEq, Eq, Store)]
pub struct FormModel {
    pub fields: FormState,
    /// True only while a request is in flight
    pub is_submitting: bool,
    /// Empty = no alert shown
    pub message: String,
}

/// Events that change the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChanged { field: Field, value: String },
    SubmitStarted,
    SubmitSettled(SubmitOutcome),
}

/// Apply one event to the model
pub fn reduce(model: FormModel, event: FormEvent) -> FormModel {
    match event {
        FormEvent::FieldChanged { field, value } => FormModel {
            fields: model.fields.with_field(field, value),
            ..model
        },
        FormEvent::SubmitStarted => FormModel {
            is_submitting: true,
            message: String::new(),
            ..model
        },
        FormEvent::SubmitSettled(outcome) => {
            let fields = if outcome.is_success() {
                FormState::default()
            } else {
                model.fields
            };
            FormModel {
                fields,
                is_submitting: false,
                message: outcome.message(),
            }
        }
    }
}

impl FormModel {
    pub fn can_submit(&self) -> bool {
        !self.is_submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}
