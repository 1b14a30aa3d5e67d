use crate::prepared::PrepareError;
use crate::prepared::PreparedField;
use crate::schema::Schema;
use crate::selection::Fields;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use indexmap::IndexMap;

/// A [`Fields`] selection validated against one parent type.
#[derive(Clone, Debug)]
pub struct PreparedFields<'schema> {
    pub(super) fields: Vec<PreparedField<'schema>>,
}
impl<'schema> PreparedFields<'schema> {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreparedField<'schema>> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn var_ref_to_var_type(&self) -> IndexMap<String, &'schema TypeRef> {
        self.fields
            .iter()
            .flat_map(|field| field.var_ref_to_var_type())
            .collect()
    }

    pub fn var_ref_to_var_value(&self) -> IndexMap<String, serde_json::Value> {
        self.fields
            .iter()
            .flat_map(|field| field.var_ref_to_var_value())
            .collect()
    }

    pub(crate) fn prepare(
        fields: &Fields,
        parent: &'schema GraphQLType,
        schema: &'schema Schema,
    ) -> Result<Self, PrepareError> {
        Ok(Self {
            fields: fields
                .iter()
                .map(|field| field.prepare(parent, schema))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}
impl std::fmt::Display for PreparedFields<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, field) in self.fields.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{field}")?;
        }
        Ok(())
    }
}
