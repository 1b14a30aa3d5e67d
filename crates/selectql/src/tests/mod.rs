mod cache_tests;
mod response_tests;
mod settings_tests;

use crate::backend::Backend;
use crate::backend::BackendError;
use crate::backend::GraphQLRequest;
use crate::provider::INTROSPECTION_OPERATION_NAME;
use std::sync::Arc;
use std::sync::Mutex;

pub(super) const STARWARS_INTROSPECTION_JSON: &str =
    include_str!("../../../../fixtures/starwars.introspection.json");

pub(super) fn starwars_raw() -> serde_json::Value {
    serde_json::from_str(STARWARS_INTROSPECTION_JSON)
        .expect("starwars fixture is valid json")
}

/// Answers the introspection query with the starwars fixture and every other
/// request with a canned response, recording each request it receives.
pub(super) struct MockBackend {
    cache_key: String,
    requests: Mutex<Vec<GraphQLRequest>>,
    response: serde_json::Value,
}
impl MockBackend {
    pub(super) fn new(response: serde_json::Value) -> Arc<Self> {
        Arc::new(Self {
            cache_key: "mock://starwars".to_string(),
            requests: Mutex::new(vec![]),
            response,
        })
    }

    pub(super) fn requests(&self) -> Vec<GraphQLRequest> {
        self.requests.lock().expect("requests lock is not poisoned").clone()
    }

    pub(super) fn introspection_count(&self) -> usize {
        self.requests()
            .iter()
            .filter(|request| {
                request.operation_name.as_deref() == Some(INTROSPECTION_OPERATION_NAME)
            })
            .count()
    }
}
impl Backend for MockBackend {
    fn cache_key(&self) -> &str {
        self.cache_key.as_str()
    }

    fn execute_query(
        &self,
        request: &GraphQLRequest,
    ) -> Result<serde_json::Value, BackendError> {
        self.requests
            .lock()
            .expect("requests lock is not poisoned")
            .push(request.clone());

        if request.operation_name.as_deref() == Some(INTROSPECTION_OPERATION_NAME) {
            return Ok(serde_json::json!({ "data": { "__schema": starwars_raw() } }));
        }
        Ok(self.response.clone())
    }
}

/// A backend that fails every request.
pub(super) struct DownBackend;
impl Backend for DownBackend {
    fn cache_key(&self) -> &str {
        "mock://down"
    }

    fn execute_query(
        &self,
        _request: &GraphQLRequest,
    ) -> Result<serde_json::Value, BackendError> {
        Err(BackendError::Transport {
            endpoint: "mock://down".to_string(),
            message: "connection refused".to_string(),
        })
    }
}
