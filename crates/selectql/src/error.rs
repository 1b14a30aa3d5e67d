use crate::backend::BackendError;
use crate::cache::CacheError;
use crate::provider::ProviderError;
use crate::settings::SettingsError;
use selectql_core::OperationKind;
use selectql_core::SchemaBuildError;
use selectql_core::SelectionError;
use selectql_core::TypedQueryBuildError;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClientError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("The server reported errors: {message}")]
    GraphQLErrors {
        message: String,
    },

    #[error("The response could not be decoded: {message}")]
    InvalidResponse {
        message: String,
    },

    #[error("A client can not be built without a backend")]
    MissingBackend,

    #[error("The response has no data at `{}`", .field.as_deref().unwrap_or("data"))]
    MissingData {
        field: Option<String>,
    },

    #[error("No {operation_kind} operation named `{name}` is defined by the schema")]
    OperationNotFound {
        name: String,
        operation_kind: OperationKind,
    },

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    QueryBuild(#[from] TypedQueryBuildError),

    #[error(transparent)]
    SchemaBuild(#[from] SchemaBuildError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}
