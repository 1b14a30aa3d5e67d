use crate::prepared::next_ref_token;
use crate::prepared::PrepareError;
use crate::prepared::PreparedDirective;
use crate::prepared::PreparedFields;
use crate::schema::Schema;
use crate::selection::Field;
use crate::types;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, PrepareError>;

/// A [`Field`] selection validated against the schema type it was selected
/// on.
#[derive(Clone, Debug)]
pub struct PreparedField<'schema> {
    pub(super) alias: Option<String>,
    pub(super) directive: Option<PreparedDirective<'schema>>,
    pub(super) name: String,
    pub(super) schema_field: &'schema types::Field,
    pub(super) sub_fields: Option<PreparedFields<'schema>>,
    pub(super) var_name_to_var_ref: IndexMap<String, String>,
    pub(super) var_ref_to_var_type: IndexMap<String, &'schema TypeRef>,
    pub(super) var_ref_to_var_value: IndexMap<String, serde_json::Value>,
}
impl<'schema> PreparedField<'schema> {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn directive(&self) -> Option<&PreparedDirective<'schema>> {
        self.directive.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn schema_field(&self) -> &'schema types::Field {
        self.schema_field
    }

    pub fn sub_fields(&self) -> Option<&PreparedFields<'schema>> {
        self.sub_fields.as_ref()
    }

    /// Argument name to variable reference, for this field only.
    pub fn var_name_to_var_ref(&self) -> &IndexMap<String, String> {
        &self.var_name_to_var_ref
    }

    /// Every variable reference declared by this field, its directive and
    /// its sub-selection, mapped to the type it must be declared with.
    pub fn var_ref_to_var_type(&self) -> IndexMap<String, &'schema TypeRef> {
        let mut var_ref_to_var_type = self.var_ref_to_var_type.clone();
        if let Some(directive) = &self.directive {
            var_ref_to_var_type.extend(
                directive.var_ref_to_var_type
                    .iter()
                    .map(|(var_ref, type_ref)| (var_ref.to_owned(), *type_ref)),
            );
        }
        if let Some(sub_fields) = &self.sub_fields {
            var_ref_to_var_type.extend(sub_fields.var_ref_to_var_type());
        }
        var_ref_to_var_type
    }

    /// Every variable reference declared by this field, its directive and
    /// its sub-selection, mapped to the value supplied for it.
    pub fn var_ref_to_var_value(&self) -> IndexMap<String, serde_json::Value> {
        let mut var_ref_to_var_value = self.var_ref_to_var_value.clone();
        if let Some(directive) = &self.directive {
            var_ref_to_var_value.extend(
                directive.var_ref_to_var_value
                    .iter()
                    .map(|(var_ref, value)| (var_ref.to_owned(), value.to_owned())),
            );
        }
        if let Some(sub_fields) = &self.sub_fields {
            var_ref_to_var_value.extend(sub_fields.var_ref_to_var_value());
        }
        var_ref_to_var_value
    }

    pub(crate) fn prepare(
        field: &Field,
        parent: &'schema GraphQLType,
        schema: &'schema Schema,
    ) -> Result<Self> {
        let name = field.name.trim();
        if name.is_empty() {
            return Err(PrepareError::EmptyName);
        }

        let schema_field = parent.field(name).ok_or_else(|| {
            PrepareError::UndefinedField {
                field_name: name.to_string(),
                parent_type_name: parent.name().to_string(),
            }
        })?;

        let directive = field.directive
            .as_ref()
            .map(|directive| directive.prepare(schema))
            .transpose()?;

        let alias = field.alias.to_owned().filter(|alias| !alias.trim().is_empty());
        let ref_prefix = match &alias {
            Some(alias) => format!("{alias}_{name}_{}", next_ref_token()),
            None => format!("{name}_{}", next_ref_token()),
        };
        let mut var_name_to_var_ref = IndexMap::new();
        let mut var_ref_to_var_type = IndexMap::new();
        let mut var_ref_to_var_value = IndexMap::new();
        for (arg_name, value) in field.args.iter() {
            let input = schema_field.arg(arg_name).ok_or_else(|| {
                PrepareError::UnsupportedFieldArgument {
                    arg_name: arg_name.to_owned(),
                    field_name: name.to_string(),
                    parent_type_name: parent.name().to_string(),
                }
            })?;
            let var_ref = format!("{ref_prefix}_{arg_name}");
            var_name_to_var_ref.insert(arg_name.to_owned(), var_ref.to_owned());
            var_ref_to_var_type.insert(var_ref.to_owned(), input.type_ref());
            var_ref_to_var_value.insert(var_ref, value.to_owned());
        }

        let sub_fields = match &field.sub_fields {
            Some(sub_fields) => {
                let output_type = schema_field.type_ref()
                    .leaf_type(schema)
                    .ok_or_else(|| PrepareError::UnresolvedOutputType {
                        field_name: name.to_string(),
                        parent_type_name: parent.name().to_string(),
                    })?;
                Some(sub_fields.prepare(output_type, schema)?)
            },
            None => None,
        };

        Ok(Self {
            alias,
            directive,
            name: name.to_string(),
            schema_field,
            sub_fields,
            var_name_to_var_ref,
            var_ref_to_var_type,
            var_ref_to_var_value,
        })
    }
}
impl std::fmt::Display for PreparedField<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "{alias}: ")?;
        }
        f.write_str(self.name.as_str())?;
        super::fmt_var_refs(f, &self.var_name_to_var_ref)?;
        if let Some(directive) = &self.directive {
            write!(f, " {directive}")?;
        }
        match &self.sub_fields {
            Some(sub_fields) if !sub_fields.is_empty() => write!(f, " {{ {sub_fields} }}"),
            _ => Ok(()),
        }
    }
}
