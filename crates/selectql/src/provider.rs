//! Where a raw introspection document comes from.

use crate::backend::Backend;
use crate::backend::BackendError;
use crate::backend::GraphQLRequest;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

type Result<T> = std::result::Result<T, ProviderError>;

pub const INTROSPECTION_OPERATION_NAME: &str = "IntrospectionQuery";

/// The standard introspection query. The response's `data.__schema` is what
/// [`Schema::from_raw()`](selectql_core::Schema::from_raw) consumes.
pub const INTROSPECTION_QUERY: &str = r#"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
  }
}
fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}
fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}
fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
"#;

/// Supplies the raw introspection document a [`Schema`](selectql_core::Schema)
/// is built from.
pub trait SchemaProvider: Send + Sync {
    /// A key that identifies the provided schema within a
    /// [`SchemaCache`](crate::SchemaCache).
    fn cache_key(&self) -> &str;

    fn load_schema(&self) -> Result<serde_json::Value>;
}

/// Hands out a document that is already in memory.
#[derive(Clone, Debug)]
pub struct StaticSchemaProvider {
    cache_key: String,
    raw_schema: serde_json::Value,
}
impl StaticSchemaProvider {
    pub fn new(raw_schema: serde_json::Value, cache_key: impl Into<String>) -> Self {
        Self {
            cache_key: cache_key.into(),
            raw_schema,
        }
    }
}
#[inherent::inherent]
impl SchemaProvider for StaticSchemaProvider {
    pub fn cache_key(&self) -> &str {
        self.cache_key.as_str()
    }

    pub fn load_schema(&self) -> Result<serde_json::Value> {
        Ok(self.raw_schema.clone())
    }
}

/// Reads the document from a JSON file. The canonical file path doubles as
/// the cache key.
#[derive(Clone, Debug)]
pub struct FileSchemaProvider {
    cache_key: String,
    file_path: PathBuf,
}
impl FileSchemaProvider {
    pub fn file_path(&self) -> &Path {
        self.file_path.as_path()
    }

    pub fn new(file_path: impl AsRef<Path>) -> Self {
        let file_path = file_path.as_ref();
        let file_path = std::fs::canonicalize(file_path)
            .unwrap_or_else(|_| file_path.to_path_buf());
        Self {
            cache_key: file_path.display().to_string(),
            file_path,
        }
    }
}
#[inherent::inherent]
impl SchemaProvider for FileSchemaProvider {
    pub fn cache_key(&self) -> &str {
        self.cache_key.as_str()
    }

    pub fn load_schema(&self) -> Result<serde_json::Value> {
        tracing::debug!("Reading local schema from `{}`", self.file_path.display());
        let json = std::fs::read_to_string(&self.file_path).map_err(|err| {
            ProviderError::FileReadError {
                file_path: self.file_path.to_owned(),
                message: err.to_string(),
            }
        })?;
        serde_json::from_str(json.as_str()).map_err(|err| ProviderError::InvalidJson {
            source_name: self.cache_key.to_owned(),
            message: err.to_string(),
        })
    }
}

/// Runs [`INTROSPECTION_QUERY`] against a [`Backend`].
#[derive(Clone)]
pub struct BackendSchemaProvider {
    backend: Arc<dyn Backend>,
    introspect: bool,
}
impl BackendSchemaProvider {
    pub fn new(backend: Arc<dyn Backend>, introspect: bool) -> Self {
        Self {
            backend,
            introspect,
        }
    }
}
#[inherent::inherent]
impl SchemaProvider for BackendSchemaProvider {
    pub fn cache_key(&self) -> &str {
        self.backend.cache_key()
    }

    pub fn load_schema(&self) -> Result<serde_json::Value> {
        if !self.introspect {
            tracing::warn!("Schema introspection was disabled by the client settings.");
            return Err(ProviderError::IntrospectionDisabled);
        }

        tracing::debug!("Loading remote schema for `{}`", self.backend.cache_key());
        let request = GraphQLRequest::new(INTROSPECTION_QUERY)
            .with_operation_name(INTROSPECTION_OPERATION_NAME);
        let mut response = self.backend.execute_query(&request)?;

        match response.pointer_mut("/data/__schema").map(serde_json::Value::take) {
            Some(schema) if !schema.is_null() => Ok(schema),
            _ => Err(ProviderError::MissingSchema {
                source_name: self.backend.cache_key().to_string(),
                errors: response.get("errors").map(|errors| errors.to_string()),
            }),
        }
    }
}
impl std::fmt::Debug for BackendSchemaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSchemaProvider")
            .field("cache_key", &self.backend.cache_key())
            .field("introspect", &self.introspect)
            .finish()
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ProviderError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("Failed to read schema file `{}`: {message}", .file_path.display())]
    FileReadError {
        file_path: PathBuf,
        message: String,
    },

    #[error("Schema introspection is disabled")]
    IntrospectionDisabled,

    #[error("The schema from `{source_name}` is not valid JSON: {message}")]
    InvalidJson {
        message: String,
        source_name: String,
    },

    #[error(
        "The introspection response from `{source_name}` has no `data.__schema` \
        (errors: {})",
        .errors.as_deref().unwrap_or("none"),
    )]
    MissingSchema {
        errors: Option<String>,
        source_name: String,
    },
}
