//! Dispatcher seam

use std::sync::Arc;

use async_trait::async_trait;

use super::request::RequestDescriptor;
use crate::error::Result;

/// Executes request descriptors against the service.
///
/// Implementations own transport, authentication, API-version negotiation and
/// status handling. A successful call yields the response JSON, or `None` when
/// the server returned no content.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Option<serde_json::Value>>;
}

#[async_trait]
impl<D: Dispatcher + ?Sized> Dispatcher for Arc<D> {
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Option<serde_json::Value>> {
        (**self).dispatch(request).await
    }
}
