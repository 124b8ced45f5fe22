//! Scripted Task API for tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, TaskApi};
use crate::models::{CreatedTask, SubmissionPayload};

/// Replays scripted responses and records every payload it receives
pub struct MockApi {
    responses: Mutex<Vec<Result<CreatedTask, ApiError>>>,
    calls: Mutex<Vec<SubmissionPayload>>,
}

impl MockApi {
    pub fn new(response: Result<CreatedTask, ApiError>) -> Self {
        Self {
            responses: Mutex::new(vec![response]),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn created(title: &str) -> Self {
        Self::new(Ok(CreatedTask { title: title.to_string() }))
    }

    pub fn calls(&self) -> Vec<SubmissionPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl TaskApi for MockApi {
    async fn create_task(&self, payload: &SubmissionPayload) -> Result<CreatedTask, ApiError> {
        self.calls.lock().unwrap().push(payload.clone());
        self.responses.lock().unwrap().remove(0)
    }
}
