use crate::schema::introspection::IntrospectionDirective;
use crate::schema::SchemaBuildError;
use crate::types::input::inputs_from_introspection;
use crate::types::Input;
use crate::types::TypeIndex;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// A directive definition (e.g. `@include(if: Boolean!)`) declared by the
/// schema.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) args: IndexMap<String, Input>,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<String>,
    pub(crate) name: String,
}
impl Directive {
    pub fn arg(&self, name: &str) -> Option<&Input> {
        self.args.get(name)
    }

    pub fn args(&self) -> &IndexMap<String, Input> {
        &self.args
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn locations(&self) -> &[String] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_introspection(raw: &IntrospectionDirective) -> Result<Self> {
        let owner = format!("@{}", raw.name);
        Ok(Self {
            args: inputs_from_introspection(&owner, raw.args.as_ref())?,
            description: raw.description.to_owned(),
            locations: raw.locations.to_owned().unwrap_or_default(),
            name: raw.name.to_owned(),
        })
    }

    pub(crate) fn resolve(
        &mut self,
        type_indices: &IndexMap<String, TypeIndex>,
    ) -> Result<()> {
        let owner = format!("@{}", self.name);
        for arg in self.args.values_mut() {
            arg.resolve(&owner, type_indices)?;
        }
        Ok(())
    }
}
