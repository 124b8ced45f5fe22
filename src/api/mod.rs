//! Task API
//!
//! Client-side bindings for the remote task-creation endpoint.

mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::models::{CreatedTask, SubmissionPayload};

pub use http::HttpTaskApi;

/// Errors from a single create-task call
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status. The body is not read.
    #[error("server rejected task with status {status}")]
    Rejected { status: u16 },

    /// The request did not complete.
    #[error("request failed: {0}")]
    Transport(String),

    /// A success response whose body was not a task.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Anything that can create a task from a payload
#[async_trait(?Send)]
pub trait TaskApi: Send + Sync {
    async fn create_task(&self, payload: &SubmissionPayload) -> Result<CreatedTask, ApiError>;
}
