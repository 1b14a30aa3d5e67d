use crate::prepared::next_ref_token;
use crate::prepared::PrepareError;
use crate::schema::Schema;
use crate::selection::Directive;
use crate::types;
use crate::types::TypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, PrepareError>;

/// A [`Directive`] annotation validated against the directives declared by a
/// [`Schema`].
#[derive(Clone, Debug)]
pub struct PreparedDirective<'schema> {
    pub(super) name: String,
    pub(super) schema_directive: &'schema types::Directive,
    pub(super) var_name_to_var_ref: IndexMap<String, String>,
    pub(super) var_ref_to_var_type: IndexMap<String, &'schema TypeRef>,
    pub(super) var_ref_to_var_value: IndexMap<String, serde_json::Value>,
}
impl<'schema> PreparedDirective<'schema> {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn schema_directive(&self) -> &'schema types::Directive {
        self.schema_directive
    }

    pub fn var_name_to_var_ref(&self) -> &IndexMap<String, String> {
        &self.var_name_to_var_ref
    }

    pub fn var_ref_to_var_type(&self) -> &IndexMap<String, &'schema TypeRef> {
        &self.var_ref_to_var_type
    }

    pub fn var_ref_to_var_value(&self) -> &IndexMap<String, serde_json::Value> {
        &self.var_ref_to_var_value
    }

    pub(crate) fn prepare(
        directive: &Directive,
        schema: &'schema Schema,
    ) -> Result<Self> {
        let name = directive.name.trim();
        if name.is_empty() {
            return Err(PrepareError::EmptyName);
        }

        let schema_directive = schema.get_directive(name).ok_or_else(|| {
            PrepareError::UndefinedDirective {
                directive_name: name.to_string(),
            }
        })?;

        let ref_prefix = format!("{name}_{}", next_ref_token());
        let mut var_name_to_var_ref = IndexMap::new();
        let mut var_ref_to_var_type = IndexMap::new();
        let mut var_ref_to_var_value = IndexMap::new();
        for (arg_name, value) in directive.args.iter() {
            let input = schema_directive.arg(arg_name).ok_or_else(|| {
                PrepareError::UnsupportedDirectiveArgument {
                    arg_name: arg_name.to_owned(),
                    directive_name: name.to_string(),
                }
            })?;
            let var_ref = format!("{ref_prefix}_{arg_name}");
            var_name_to_var_ref.insert(arg_name.to_owned(), var_ref.to_owned());
            var_ref_to_var_type.insert(var_ref.to_owned(), input.type_ref());
            var_ref_to_var_value.insert(var_ref, value.to_owned());
        }

        Ok(Self {
            name: name.to_string(),
            schema_directive,
            var_name_to_var_ref,
            var_ref_to_var_type,
            var_ref_to_var_value,
        })
    }
}
impl std::fmt::Display for PreparedDirective<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.name)?;
        super::fmt_var_refs(f, &self.var_name_to_var_ref)
    }
}
