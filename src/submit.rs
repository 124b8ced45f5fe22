//! Submission Handler
//!
//! One create-task call mapped to exactly one of three outcomes.

use crate::api::{ApiError, TaskApi};
use crate::models::SubmissionPayload;

pub const REJECTED_MESSAGE: &str = "Failed to create task. Please try again.";
pub const ERRORED_MESSAGE: &str = "Error connecting to server. Please try again.";

/// Result of a settled submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Server accepted the task and echoed its title
    Created { title: String },
    /// Server answered with a failure status
    Rejected,
    /// Request could not complete or the response was unreadable
    Errored,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created { .. })
    }

    /// User-visible alert text
    pub fn message(&self) -> String {
        match self {
            SubmitOutcome::Created { title } => format!("Task \"{}\" created successfully!", title),
            SubmitOutcome::Rejected => REJECTED_MESSAGE.to_string(),
            SubmitOutcome::Errored => ERRORED_MESSAGE.to_string(),
        }
    }
}

impl From<ApiError> for SubmitOutcome {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { .. } => SubmitOutcome::Rejected,
            ApiError::Transport(_) | ApiError::Decode(_) => SubmitOutcome::Errored,
        }
    }
}

/// Send the payload once and classify the result. Never retries.
pub async fn submit_task<A>(api: &A, payload: &SubmissionPayload) -> SubmitOutcome
where
    A: TaskApi + ?Sized,
{
    log::info!("[Submit] creating task {:?} (priority {:?})", payload.title, payload.priority);
    match api.create_task(payload).await {
        Ok(task) => {
            log::info!("[Submit] created task {:?}", task.title);
            SubmitOutcome::Created { title: task.title }
        }
        Err(err) => {
            log::warn!("[Submit] {}", err);
            SubmitOutcome::from(err)
        }
    }
}
