use crate::backend::Backend;
use crate::backend::GraphQLRequest;
use crate::cache::SchemaCache;
use crate::error::ClientError;
use crate::loader;
use crate::provider::BackendSchemaProvider;
use crate::provider::SchemaProvider;
use crate::proxy::OperationServiceProxy;
use crate::response::GraphQLResponse;
use crate::settings::Settings;
use selectql_core::OperationKind;
use selectql_core::Schema;
use std::sync::Arc;

type Result<T> = std::result::Result<T, ClientError>;

/// Executes operations against a [`Backend`], checking every selection
/// against the backend's [`Schema`] first.
#[derive(Clone)]
pub struct Client {
    backend: Arc<dyn Backend>,
    schema: Schema,
    settings: Settings,
}
impl Client {
    pub fn backend(&self) -> &dyn Backend {
        self.backend.as_ref()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Send `request` through the backend entry point for `operation_kind`.
    pub fn execute(
        &self,
        operation_kind: OperationKind,
        request: GraphQLRequest,
    ) -> Result<GraphQLResponse> {
        let raw = match operation_kind {
            OperationKind::Mutation => self.backend.execute_mutation(&request)?,
            OperationKind::Query => self.backend.execute_query(&request)?,
            OperationKind::Subscription => self.backend.execute_subscription(&request)?,
        };
        GraphQLResponse::from_raw(request, raw)
    }

    pub fn mutation(&self) -> OperationServiceProxy<'_> {
        self.operations(OperationKind::Mutation)
    }

    /// Build a client whose schema is introspected from `backend`.
    pub fn new(backend: impl Backend + 'static, settings: Settings) -> Result<Self> {
        Self::builder()
            .backend(backend)
            .settings(settings)
            .build()
    }

    /// The root operations of `operation_kind`. Empty when the schema does
    /// not define that root type.
    pub fn operations(&self, operation_kind: OperationKind) -> OperationServiceProxy<'_> {
        OperationServiceProxy::new(self, operation_kind)
    }

    pub fn query(&self) -> OperationServiceProxy<'_> {
        self.operations(OperationKind::Query)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn subscription(&self) -> OperationServiceProxy<'_> {
        self.operations(OperationKind::Subscription)
    }
}
impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("backend", &self.backend.cache_key())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`Client`].
///
/// The schema comes from the first of these that is configured:
///
/// 1. [`ClientBuilder::schema`]
/// 2. [`ClientBuilder::provider`]
/// 3. an introspection query sent to the backend (unless
///    [`Settings::introspect`] is disabled)
///
/// A [`ClientBuilder::cache`] is consulted for the latter two.
#[derive(Default)]
pub struct ClientBuilder {
    backend: Option<Arc<dyn Backend>>,
    cache: Option<Arc<dyn SchemaCache>>,
    provider: Option<Arc<dyn SchemaProvider>>,
    schema: Option<Schema>,
    settings: Settings,
}
impl ClientBuilder {
    pub fn backend(mut self, backend: impl Backend + 'static) -> Self {
        self.backend = Some(Arc::new(backend));
        self
    }

    pub fn build(self) -> Result<Client> {
        let backend = self.backend.ok_or(ClientError::MissingBackend)?;

        let schema = match self.schema {
            Some(schema) => schema,
            None => {
                let provider = self.provider.unwrap_or_else(|| {
                    Arc::new(BackendSchemaProvider::new(
                        backend.clone(),
                        self.settings.introspect,
                    ))
                });
                loader::load_schema(provider.as_ref(), self.cache.as_deref())?
            },
        };

        Ok(Client {
            backend,
            schema,
            settings: self.settings,
        })
    }

    pub fn cache(mut self, cache: Arc<dyn SchemaCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn provider(mut self, provider: impl SchemaProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
}
