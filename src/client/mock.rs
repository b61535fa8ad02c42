//! Mock dispatcher for testing
//!
//! Captures every descriptor it receives and answers with queued responses,
//! so operations can be verified without making real API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::dispatch::Dispatcher;
use super::request::RequestDescriptor;
use crate::error::{ApiError, Result};

/// Mock dispatcher for testing.
///
/// # Example
/// ```ignore
/// let client = WorkClient::new(MockDispatcher::new().with_response(json!([])));
/// client.get_plans("P").await?;
/// assert_eq!(client.dispatcher().last_request().await.path(), "P/_apis/work/plans");
/// ```
#[derive(Default)]
pub struct MockDispatcher {
    /// Responses handed out in order; an empty queue answers with no content
    responses: Arc<Mutex<VecDeque<Option<serde_json::Value>>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<RequestDescriptor>>>,
}

impl MockDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn with_response(self, value: serde_json::Value) -> Self {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .push_back(Some(value));
        self
    }

    /// Queue a no-content response.
    pub fn with_no_content(self) -> Self {
        self.responses
            .try_lock()
            .expect("mock not shared yet")
            .push_back(None);
        self
    }

    /// Fail the next call with an error.
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// All captured requests, oldest first.
    pub async fn requests(&self) -> Vec<RequestDescriptor> {
        self.captured_requests.lock().await.clone()
    }

    /// The most recent captured request.
    pub async fn last_request(&self) -> RequestDescriptor {
        self.captured_requests
            .lock()
            .await
            .last()
            .cloned()
            .expect("no request was dispatched")
    }
}

#[async_trait]
impl Dispatcher for MockDispatcher {
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Option<serde_json::Value>> {
        self.captured_requests.lock().await.push(request);

        if let Some(error) = self.error.lock().await.take() {
            return Err(error.into());
        }

        Ok(self.responses.lock().await.pop_front().flatten())
    }
}
