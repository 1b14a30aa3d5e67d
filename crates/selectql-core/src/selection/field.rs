use crate::prepared::PrepareError;
use crate::prepared::PreparedField;
use crate::schema::Schema;
use crate::selection::Directive;
use crate::selection::Fields;
use crate::selection::SelectionArg;
use crate::selection::SelectionKey;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// A single field to select, optionally aliased, annotated with a
/// [`Directive`], given arguments and narrowed with a sub-selection.
///
/// ```
/// use selectql_core::Field;
///
/// let repo = Field::new("repository")
///     .alias("main")
///     .arg("name", "selectql")
///     .sub_fields(["id", "name"]);
/// assert_eq!(repo.to_string(), "main: repository { id name }");
/// ```
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) alias: Option<String>,
    pub(crate) args: IndexMap<String, serde_json::Value>,
    pub(crate) directive: Option<Directive>,
    pub(crate) name: String,
    pub(crate) sub_fields: Option<Fields>,
}
impl Field {
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn aliased_as(&self) -> Option<&str> {
        self.alias.as_deref()
    }

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

    pub fn directive(mut self, directive: Directive) -> Self {
        self.directive = Some(directive);
        self
    }

    pub fn directive_annotation(&self) -> Option<&Directive> {
        self.directive.as_ref()
    }

    pub fn key(&self) -> SelectionKey {
        SelectionKey {
            alias: self.alias.to_owned(),
            directive: self.directive.as_ref().map(|d| d.name.to_owned()),
            name: self.name.to_owned(),
            sub_keys: self.sub_fields.as_ref().map(Fields::sorted_keys),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            alias: None,
            args: IndexMap::new(),
            directive: None,
            name: name.into(),
            sub_fields: None,
        }
    }

    /// Validate this field (and everything below it) against `parent`, the
    /// schema type it is selected on.
    pub fn prepare<'schema>(
        &self,
        parent: &'schema GraphQLType,
        schema: &'schema Schema,
    ) -> Result<PreparedField<'schema>, PrepareError> {
        PreparedField::prepare(self, parent, schema)
    }

    /// The key this field's value is returned under: its alias, or its name
    /// when it has none.
    pub fn response_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<&Fields> {
        self.sub_fields.as_ref()
    }

    pub fn sub_fields(mut self, sub_fields: impl Into<SelectionArg>) -> Self {
        self.sub_fields = Some(Fields::new().select(sub_fields));
        self
    }

    /// Indicates if both fields address the same response key, ignoring
    /// arguments and sub-selections.
    pub(crate) fn same_field_as(&self, other: &Field) -> bool {
        self.alias == other.alias
            && self.name == other.name
            && self.directive == other.directive
    }
}
impl std::cmp::PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
impl std::cmp::Eq for Field {}
impl std::hash::Hash for Field {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "{alias}: ")?;
        }
        f.write_str(self.name.as_str())?;
        if let Some(sub_fields) = &self.sub_fields {
            write!(f, " {{ {sub_fields} }}")?;
        }
        Ok(())
    }
}
impl<T: Into<SelectionArg>> std::ops::Add<T> for Field {
    type Output = Fields;

    fn add(self, other: T) -> Fields {
        Fields::from(self) + other
    }
}
impl<T: Into<SelectionArg>> std::ops::BitAnd<T> for Field {
    type Output = Fields;

    fn bitand(self, other: T) -> Fields {
        self + other
    }
}
