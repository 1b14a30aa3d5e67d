use crate::schema::introspection::IntrospectionSchema;
use crate::schema::introspection::RootTypeName;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::TypeIndex;
use crate::types::TypeKind;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`] from an introspection document.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    introspection: Option<IntrospectionSchema>,
    raw: Option<serde_json::Value>,
}
impl SchemaBuilder {
    pub fn build(self) -> Result<Schema> {
        let (introspection, raw) = match (self.introspection, self.raw) {
            (Some(introspection), Some(raw)) => (introspection, raw),
            _ => return Err(SchemaBuildError::NoTypesFound),
        };

        let raw_types = match introspection.types.as_ref() {
            Some(raw_types) if !raw_types.is_empty() => raw_types,
            _ => return Err(SchemaBuildError::NoTypesFound),
        };

        // Phase 1: materialize every named type into the arena.
        let mut types = Vec::with_capacity(raw_types.len());
        let mut type_indices = IndexMap::with_capacity(raw_types.len());
        for raw_type in raw_types {
            let graphql_type = GraphQLType::from_introspection(raw_type)?;
            if type_indices.contains_key(graphql_type.name()) {
                return Err(SchemaBuildError::DuplicateTypeDefinition {
                    type_name: graphql_type.name,
                });
            }
            type_indices.insert(graphql_type.name.to_owned(), TypeIndex(types.len()));
            types.push(graphql_type);
        }

        let mut directives = IndexMap::new();
        for raw_directive in introspection.directives.iter().flatten() {
            let directive = Directive::from_introspection(raw_directive)?;
            directives.insert(directive.name.to_owned(), directive);
        }

        let query_type = resolve_root_type(
            "query",
            introspection.query_type.as_ref(),
            &type_indices,
        )?;
        let mutation_type = resolve_root_type(
            "mutation",
            introspection.mutation_type.as_ref(),
            &type_indices,
        )?;
        let subscription_type = resolve_root_type(
            "subscription",
            introspection.subscription_type.as_ref(),
            &type_indices,
        )?;

        // Phase 2: link every type reference to its arena index.
        for graphql_type in types.iter_mut() {
            graphql_type.resolve(&type_indices)?;
        }
        for directive in directives.values_mut() {
            directive.resolve(&type_indices)?;
        }

        Ok(Schema {
            directives,
            mutation_type,
            query_type,
            raw,
            subscription_type,
            type_indices,
            types,
        })
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Read and load an introspection document from a JSON file on disk.
    pub fn load_introspection_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let file_path = file_path.as_ref();
        let json = std::fs::read_to_string(file_path).map_err(|err| {
            SchemaBuildError::SchemaFileReadError {
                file_path: file_path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        self.load_introspection_str(json)
    }

    pub fn load_introspection_str(self, json: impl AsRef<str>) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_str(json.as_ref())
            .map_err(|err| SchemaBuildError::InvalidIntrospectionDocument {
                message: err.to_string(),
            })?;
        self.load_introspection_value(raw)
    }

    /// Load an introspection document. Accepts the `__schema` object itself,
    /// `{"__schema": ...}` or `{"data": {"__schema": ...}}`.
    pub fn load_introspection_value(
        mut self,
        raw: serde_json::Value,
    ) -> Result<Self> {
        let schema_value = unwrap_schema_object(raw);
        let introspection: IntrospectionSchema =
            serde_json::from_value(schema_value.clone()).map_err(|err| {
                SchemaBuildError::InvalidIntrospectionDocument {
                    message: err.to_string(),
                }
            })?;

        self.introspection = Some(introspection);
        self.raw = Some(schema_value);
        Ok(self)
    }
}

fn resolve_root_type(
    operation: &'static str,
    root: Option<&RootTypeName>,
    type_indices: &IndexMap<String, TypeIndex>,
) -> Result<Option<TypeIndex>> {
    let Some(type_name) = root.and_then(|root| root.name.as_deref()) else {
        return Ok(None);
    };

    match type_indices.get(type_name) {
        Some(idx) => Ok(Some(*idx)),
        None => Err(SchemaBuildError::UndefinedRootOperationType {
            operation,
            type_name: type_name.to_string(),
        }),
    }
}

fn unwrap_schema_object(raw: serde_json::Value) -> serde_json::Value {
    match raw {
        serde_json::Value::Object(mut map) => {
            if let Some(serde_json::Value::Object(data)) = map.get_mut("data") {
                if let Some(schema) = data.remove("__schema") {
                    return schema;
                }
            }
            if let Some(schema) = map.remove("__schema") {
                return schema;
            }
            serde_json::Value::Object(map)
        },
        other => other,
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
    },

    #[error("The introspection document could not be decoded: {message}")]
    InvalidIntrospectionDocument {
        message: String,
    },

    #[error(
        "A type reference of kind `{kind}` found on `{referenced_from}` is \
        malformed: wrapper kinds must carry `ofType` and named kinds must \
        carry `name`"
    )]
    MalformedTypeRef {
        kind: TypeKind,
        referenced_from: String,
    },

    #[error("The introspection document does not define any types")]
    NoTypesFound,

    #[error("Failed to read introspection file `{}`: {message}", .file_path.display())]
    SchemaFileReadError {
        file_path: PathBuf,
        message: String,
    },

    #[error(
        "The {operation} root operation type `{type_name}` is not defined in \
        the schema"
    )]
    UndefinedRootOperationType {
        operation: &'static str,
        type_name: String,
    },

    #[error(
        "`{referenced_from}` references the type `{undefined_type_name}`, \
        which is not defined in the schema"
    )]
    UndefinedTypeReference {
        referenced_from: String,
        undefined_type_name: String,
    },

    #[error("A type of kind `{kind}` was defined without a name")]
    UnnamedType {
        kind: TypeKind,
    },
}
