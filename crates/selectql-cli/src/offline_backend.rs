use selectql::Backend;
use selectql::BackendError;
use selectql::GraphQLRequest;

/// Stands in for a server when the CLI only compiles operations. Every
/// request is refused.
#[derive(Debug)]
pub(crate) struct OfflineBackend;
impl Backend for OfflineBackend {
    fn cache_key(&self) -> &str {
        "offline"
    }

    fn execute_query(
        &self,
        request: &GraphQLRequest,
    ) -> Result<serde_json::Value, BackendError> {
        log::debug!(
            "Refusing to send `{}`: no server is configured.",
            request.operation_name.as_deref().unwrap_or("<anonymous>"),
        );
        Err(BackendError::Transport {
            endpoint: self.cache_key().to_string(),
            message: "the CLI does not send requests".to_string(),
        })
    }
}

/// A client whose schema is read from `schema_path`.
pub(crate) fn offline_client(
    schema_path: &std::path::Path,
    settings: selectql::Settings,
) -> Result<selectql::Client, selectql::ClientError> {
    selectql::Client::builder()
        .backend(OfflineBackend)
        .provider(selectql::provider::FileSchemaProvider::new(schema_path))
        .settings(settings)
        .build()
}
