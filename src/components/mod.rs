//! UI Components
//!
//! Leptos components for the task form.

mod task_form;
mod priority_select;
mod status_alert;

pub use task_form::TaskForm;
pub use priority_select::PrioritySelect;
pub use status_alert::StatusAlert;
