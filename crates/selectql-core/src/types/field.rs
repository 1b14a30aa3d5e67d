use crate::schema::introspection::IntrospectionField;
use crate::schema::SchemaBuildError;
use crate::types::input::inputs_from_introspection;
use crate::types::Input;
use crate::types::TypeIndex;
use crate::types::TypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A field declared on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) args: IndexMap<String, Input>,
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) is_deprecated: bool,
    pub(crate) name: String,
    pub(crate) type_ref: TypeRef,
}
impl Field {
    pub fn arg(&self, name: &str) -> Option<&Input> {
        self.args.get(name)
    }

    pub fn args(&self) -> &IndexMap<String, Input> {
        &self.args
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.is_deprecated
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The name of the named type this field ultimately returns, with all
    /// `LIST`/`NON_NULL` wrappers stripped.
    pub fn output_type_name(&self) -> Option<&str> {
        self.type_ref.leaf_type_name()
    }

    pub fn type_ref(&self) -> &TypeRef {
        &self.type_ref
    }

    pub(crate) fn from_introspection(
        parent_type_name: &str,
        raw: &IntrospectionField,
    ) -> Result<Self> {
        let owner = format!("{parent_type_name}.{}", raw.name);
        Ok(Self {
            args: inputs_from_introspection(&owner, raw.args.as_ref())?,
            deprecation_reason: raw.deprecation_reason.to_owned(),
            description: raw.description.to_owned(),
            is_deprecated: raw.is_deprecated.unwrap_or(false),
            name: raw.name.to_owned(),
            type_ref: TypeRef::from_introspection(&owner, &raw.type_ref)?,
        })
    }

    pub(crate) fn resolve(
        &mut self,
        parent_type_name: &str,
        type_indices: &IndexMap<String, TypeIndex>,
    ) -> Result<()> {
        let owner = format!("{parent_type_name}.{}", self.name);
        self.type_ref.resolve(&owner, type_indices)?;
        for arg in self.args.values_mut() {
            arg.resolve(&owner, type_indices)?;
        }
        Ok(())
    }
}
