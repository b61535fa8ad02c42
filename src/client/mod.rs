//! Work API client
//!
//! [`WorkClient`] is the typed surface: one method per API operation, grouped
//! by area under [`api`]. Every method builds a [`RequestDescriptor`] from the
//! endpoint table in [`routes`] and hands it to the injected [`Dispatcher`].

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

pub mod api;
pub mod context;
pub mod dispatch;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod rate_limit;
pub mod request;
pub mod routes;

pub use context::TeamContext;
pub use dispatch::Dispatcher;
pub use http::{Credentials, HttpDispatcher};
#[cfg(test)]
pub use mock::MockDispatcher;
pub use request::{HttpMethod, QueryParams, RequestDescriptor};
pub use routes::{DEFAULT_API_VERSION, Endpoint, RESOURCE_AREA_ID};

/// Typed client for the Work API.
///
/// Cheap to clone; clones share the dispatcher.
pub struct WorkClient<D> {
    dispatcher: Arc<D>,
    api_version: Option<String>,
}

impl<D> Clone for WorkClient<D> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            api_version: self.api_version.clone(),
        }
    }
}

impl<D: Dispatcher> WorkClient<D> {
    /// Create a client over a dispatcher.
    pub fn new(dispatcher: D) -> Self {
        Self::from_shared(Arc::new(dispatcher))
    }

    /// Create a client over a dispatcher shared with other clients.
    pub fn from_shared(dispatcher: Arc<D>) -> Self {
        Self {
            dispatcher,
            api_version: None,
        }
    }

    /// Send every request with this API version instead of the pinned one.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// The API version override, if any.
    pub fn api_version_override(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Start a descriptor for an endpoint, applying the version override.
    pub(crate) fn request(&self, endpoint: &Endpoint) -> RequestDescriptor {
        let descriptor = RequestDescriptor::new(endpoint);
        match &self.api_version {
            Some(version) => descriptor.api_version(version.clone()),
            None => descriptor,
        }
    }

    /// Dispatch and deserialize the response body.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T> {
        let operation = request.operation;
        let value = self.dispatcher.dispatch(request).await?.ok_or_else(|| {
            ApiError::InvalidResponse(format!("{} returned no content", operation))
        })?;

        serde_json::from_value(value).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse {} response: {}", operation, e))
                .into()
        })
    }

    /// Dispatch an operation that answers with no content.
    pub(crate) async fn send_empty(&self, request: RequestDescriptor) -> Result<()> {
        self.dispatcher.dispatch(request).await?;
        Ok(())
    }
}
