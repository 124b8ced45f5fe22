//! HTTP Task API
//!
//! `reqwest` client for `POST /api/tasks`. No auth, no timeout, no retry.

use async_trait::async_trait;
use url::Url;

use super::{ApiError, TaskApi};
use crate::models::{CreatedTask, SubmissionPayload};

#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTaskApi {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The exact request `create_task` sends
    pub fn build_request(&self, payload: &SubmissionPayload) -> Result<reqwest::Request, ApiError> {
        self.client
            .post(self.endpoint.clone())
            .json(payload)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn create_task(&self, payload: &SubmissionPayload) -> Result<CreatedTask, ApiError> {
        let request = self.build_request(payload)?;
        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Rejected { status: status.as_u16() });
        }

        response
            .json::<CreatedTask>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
