use crate::schema::introspection::IntrospectionTypeRef;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::TypeKind;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Position of a [`GraphQLType`] within the type arena owned by a
/// [`Schema`]. Only meaningful for the [`Schema`] that produced it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct TypeIndex(pub(crate) usize);

/// A (possibly `LIST`/`NON_NULL`-wrapped) reference to a named type.
///
/// Wrapper refs carry an `of_type` and no name, named refs carry a name and
/// no `of_type`. Once the owning [`Schema`] has been built, every named ref
/// is linked to its [`GraphQLType`] by index so that
/// [`TypeRef::leaf_type()`] never needs a by-name lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeRef {
    pub(crate) kind: TypeKind,
    pub(crate) name: Option<String>,
    pub(crate) of_type: Option<Box<TypeRef>>,
    pub(crate) resolved: Option<TypeIndex>,
}
impl TypeRef {
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Recursively unwrap this [`TypeRef`] and return the inner-most, named
    /// [`TypeRef`].
    pub fn leaf(&self) -> &TypeRef {
        match &self.of_type {
            Some(inner) => inner.leaf(),
            None => self,
        }
    }

    /// Resolve the inner-most named type of this reference within `schema`.
    pub fn leaf_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        let leaf = self.leaf();
        match leaf.resolved {
            Some(idx) => schema.type_at(idx),
            None => leaf.name.as_deref().and_then(|name| schema.get_type(name)),
        }
    }

    pub fn leaf_type_name(&self) -> Option<&str> {
        self.leaf().name.as_deref()
    }

    pub fn list(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
            resolved: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
            resolved: None,
        }
    }

    pub fn non_null(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
            resolved: None,
        }
    }

    /// Indicates if a `null` value is acceptable for this reference.
    pub fn nullable(&self) -> bool {
        self.kind != TypeKind::NonNull
    }

    pub fn of_type(&self) -> Option<&TypeRef> {
        self.of_type.as_deref()
    }

    /// Render this reference in GraphQL type syntax (e.g. `[String!]!`).
    pub fn to_graphql_string(&self) -> String {
        self.to_string()
    }

    pub(crate) fn from_introspection(
        referenced_from: &str,
        raw: &IntrospectionTypeRef,
    ) -> Result<Self> {
        match (raw.kind.is_wrapper(), &raw.of_type, &raw.name) {
            (true, Some(inner), _) => Ok(Self {
                kind: raw.kind,
                name: None,
                of_type: Some(Box::new(Self::from_introspection(
                    referenced_from,
                    inner,
                )?)),
                resolved: None,
            }),

            (false, None, Some(name)) => Ok(Self::named(raw.kind, name)),

            _ => Err(SchemaBuildError::MalformedTypeRef {
                kind: raw.kind,
                referenced_from: referenced_from.to_string(),
            }),
        }
    }

    /// Link the inner-most named ref to its index in the type arena.
    pub(crate) fn resolve(
        &mut self,
        referenced_from: &str,
        type_indices: &IndexMap<String, TypeIndex>,
    ) -> Result<()> {
        if let Some(inner) = self.of_type.as_mut() {
            return inner.resolve(referenced_from, type_indices);
        }

        let name = self.name.as_deref().unwrap_or_default();
        match type_indices.get(name) {
            Some(idx) => {
                self.resolved = Some(*idx);
                Ok(())
            },
            None => Err(SchemaBuildError::UndefinedTypeReference {
                referenced_from: referenced_from.to_string(),
                undefined_type_name: name.to_string(),
            }),
        }
    }
}
impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, &self.of_type) {
            (TypeKind::NonNull, Some(inner)) => write!(f, "{inner}!"),
            (TypeKind::List, Some(inner)) => write!(f, "[{inner}]"),
            (_, Some(inner)) => write!(f, "{inner}"),
            (_, None) => f.write_str(self.name.as_deref().unwrap_or_default()),
        }
    }
}
