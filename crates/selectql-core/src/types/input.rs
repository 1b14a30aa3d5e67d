use crate::schema::introspection::IntrospectionInputValue;
use crate::schema::SchemaBuildError;
use crate::types::TypeIndex;
use crate::types::TypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// An input value declared by the schema: a field argument, a directive
/// argument or an input-object field.
#[derive(Clone, Debug, PartialEq)]
pub struct Input {
    pub(crate) default_value: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) type_ref: TypeRef,
}
impl Input {
    /// The default value in GraphQL literal form (e.g. `"George Lucas"` with
    /// the quotes), exactly as introspection reports it.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub(crate) fn from_introspection(
        owner: &str,
        raw: &IntrospectionInputValue,
    ) -> Result<Self> {
        let default_value = raw.default_value.as_ref().and_then(|value| match value {
            serde_json::Value::Null => None,
            serde_json::Value::String(literal) => Some(literal.to_owned()),
            other => Some(other.to_string()),
        });

        Ok(Self {
            default_value,
            description: raw.description.to_owned(),
            name: raw.name.to_owned(),
            type_ref: TypeRef::from_introspection(
                &format!("{owner}({}:)", raw.name),
                &raw.type_ref,
            )?,
        })
    }

    pub(crate) fn resolve(
        &mut self,
        owner: &str,
        type_indices: &IndexMap<String, TypeIndex>,
    ) -> Result<()> {
        let referenced_from = format!("{owner}({}:)", self.name);
        self.type_ref.resolve(&referenced_from, type_indices)
    }
}

pub(crate) fn inputs_from_introspection(
    owner: &str,
    raw: Option<&Vec<IntrospectionInputValue>>,
) -> Result<IndexMap<String, Input>> {
    let mut inputs = IndexMap::new();
    for raw_input in raw.into_iter().flatten() {
        let input = Input::from_introspection(owner, raw_input)?;
        inputs.insert(input.name.to_owned(), input);
    }
    Ok(inputs)
}
