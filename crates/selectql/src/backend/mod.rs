//! The transport seam: anything that can execute a [`GraphQLRequest`] and
//! hand back the raw JSON response.

mod graphql_request;
#[cfg(feature = "http")]
mod http_backend;

pub use graphql_request::GraphQLRequest;
#[cfg(feature = "http")]
pub use http_backend::HttpBackend;

use thiserror::Error;

type Result<T> = std::result::Result<T, BackendError>;

/// Executes GraphQL requests against some server.
pub trait Backend: Send + Sync {
    /// A key that identifies the schema served by this backend, e.g. its
    /// endpoint URL. Used to look the schema up in a
    /// [`SchemaCache`](crate::SchemaCache).
    fn cache_key(&self) -> &str;

    fn execute_query(&self, request: &GraphQLRequest) -> Result<serde_json::Value>;

    fn execute_mutation(&self, request: &GraphQLRequest) -> Result<serde_json::Value> {
        self.execute_query(request)
    }

    fn execute_subscription(
        &self,
        _request: &GraphQLRequest,
    ) -> Result<serde_json::Value> {
        Err(BackendError::SubscriptionsUnsupported)
    }
}
impl<B: Backend + ?Sized> Backend for std::sync::Arc<B> {
    fn cache_key(&self) -> &str {
        (**self).cache_key()
    }

    fn execute_query(&self, request: &GraphQLRequest) -> Result<serde_json::Value> {
        (**self).execute_query(request)
    }

    fn execute_mutation(&self, request: &GraphQLRequest) -> Result<serde_json::Value> {
        (**self).execute_mutation(request)
    }

    fn execute_subscription(
        &self,
        request: &GraphQLRequest,
    ) -> Result<serde_json::Value> {
        (**self).execute_subscription(request)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum BackendError {
    #[error("`{endpoint}` responded with HTTP status {status}")]
    HttpStatus {
        endpoint: String,
        status: u16,
    },

    #[error("The response from `{endpoint}` could not be decoded: {message}")]
    InvalidResponse {
        endpoint: String,
        message: String,
    },

    #[error("This backend does not support subscriptions")]
    SubscriptionsUnsupported,

    #[error("Sending the request to `{endpoint}` failed: {message}")]
    Transport {
        endpoint: String,
        message: String,
    },
}
