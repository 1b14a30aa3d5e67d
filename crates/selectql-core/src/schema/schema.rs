use crate::query::OperationKind;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaBuildError;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::TypeIndex;
use indexmap::IndexMap;

/// Represents an immutable GraphQL schema built from an introspection
/// document.
///
/// Types live in an arena and every [`TypeRef`](crate::types::TypeRef) in the
/// schema is linked to its target by index, so a [`Schema`] can be shared
/// freely (including across threads) once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) directives: IndexMap<String, Directive>,
    pub(crate) mutation_type: Option<TypeIndex>,
    pub(crate) query_type: Option<TypeIndex>,
    pub(crate) raw: serde_json::Value,
    pub(crate) subscription_type: Option<TypeIndex>,
    pub(crate) type_indices: IndexMap<String, TypeIndex>,
    pub(crate) types: Vec<GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, Directive>`] containing all directives
    /// reported by introspection, in document order.
    pub fn all_directives(&self) -> &IndexMap<String, Directive> {
        &self.directives
    }

    /// Iterate over every type defined within this [`Schema`], in document
    /// order.
    pub fn all_types(&self) -> impl Iterator<Item = &GraphQLType> {
        self.types.iter()
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Build a [`Schema`] from a raw introspection document.
    ///
    /// Accepts either the `__schema` object itself, `{"__schema": ...}`, or a
    /// full introspection response (`{"data": {"__schema": ...}}`).
    pub fn from_raw(raw: serde_json::Value) -> Result<Self, SchemaBuildError> {
        SchemaBuilder::new()
            .load_introspection_value(raw)?
            .build()
    }

    /// Parse a JSON string and build a [`Schema`] from it (see
    /// [`Schema::from_raw()`] for the accepted shapes).
    pub fn from_json_str(json: &str) -> Result<Self, SchemaBuildError> {
        SchemaBuilder::new()
            .load_introspection_str(json)?
            .build()
    }

    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.type_indices
            .get(name)
            .and_then(|idx| self.type_at(*idx))
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    pub fn mutation_type(&self) -> Option<&GraphQLType> {
        self.mutation_type.and_then(|idx| self.type_at(idx))
    }

    /// Returns this [`Schema`]'s Query root operation type (if one was
    /// defined).
    pub fn query_type(&self) -> Option<&GraphQLType> {
        self.query_type.and_then(|idx| self.type_at(idx))
    }

    /// The `__schema` object this [`Schema`] was built from.
    pub fn raw(&self) -> &serde_json::Value {
        &self.raw
    }

    pub fn root_type(&self, kind: OperationKind) -> Option<&GraphQLType> {
        match kind {
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Query => self.query_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Returns this [`Schema`]'s Subscription root operation type (if one was
    /// defined).
    pub fn subscription_type(&self) -> Option<&GraphQLType> {
        self.subscription_type.and_then(|idx| self.type_at(idx))
    }

    pub(crate) fn type_at(&self, idx: TypeIndex) -> Option<&GraphQLType> {
        self.types.get(idx.0)
    }
}
