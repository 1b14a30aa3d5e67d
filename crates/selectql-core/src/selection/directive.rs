use crate::prepared::PrepareError;
use crate::prepared::PreparedDirective;
use crate::schema::Schema;
use indexmap::IndexMap;

/// A directive annotation to attach to a selected [`Field`](crate::Field),
/// e.g. `Directive::new("include").arg("if", true)`.
///
/// Two directives are considered equal when they share a name.
#[derive(Clone, Debug)]
pub struct Directive {
    pub(crate) args: IndexMap<String, serde_json::Value>,
    pub(crate) name: String,
}
impl Directive {
    pub fn arg(
        mut self,
        name: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }

    pub fn args(&self) -> &IndexMap<String, serde_json::Value> {
        &self.args
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            args: IndexMap::new(),
            name: name.into(),
        }
    }

    /// Validate this directive against the directives declared by `schema`.
    pub fn prepare<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<PreparedDirective<'schema>, PrepareError> {
        PreparedDirective::prepare(self, schema)
    }
}
impl std::cmp::PartialEq for Directive {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl std::cmp::Eq for Directive {}
impl std::hash::Hash for Directive {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
