use crate::prepared::PrepareError;
use crate::prepared::PreparedFields;
use crate::query::BuilderSettings;
use crate::query::GQLQueryBuilder;
use crate::query::OperationKind;
use crate::schema::Schema;
use crate::selection::Fields;
use crate::selection::SelectionArg;
use crate::types;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, TypedQueryBuildError>;

/// Builds an operation for a single root field, checking the selection and
/// the operation variables against the [`Schema`].
///
/// The operation is named after the root field:
///
/// `query film($id: ID) { film(id: $id) { id title } }`
#[derive(Clone, Debug)]
pub struct TypedQueryBuilder<'schema> {
    action_variables: IndexMap<String, serde_json::Value>,
    operation_field: &'schema types::Field,
    operation_kind: OperationKind,
    operation_variables: IndexMap<String, serde_json::Value>,
    prepared: Vec<PreparedFields<'schema>>,
    schema: &'schema Schema,
    selection: Fields,
    settings: BuilderSettings,
}
impl<'schema> TypedQueryBuilder<'schema> {
    /// Render the operation document.
    pub fn build(&self) -> String {
        let name = self.operation_name();
        let selection = self.prepared
            .iter()
            .filter(|prepared| !prepared.is_empty())
            .map(|prepared| prepared.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        GQLQueryBuilder::new()
            .operation(
                self.operation_kind.as_str(),
                name,
                Some(&self.operation_variables),
            )
            .action(name, Some(&self.action_variables))
            .fields(selection)
            .build()
    }

    /// Select fields on the root field's output type.
    ///
    /// Every argument in the selection is declared as an operation variable
    /// and the returned map holds the values to submit for them. Repeated
    /// calls add to the selection; fields that were already selected, or
    /// that would clash with an earlier selection under the same response
    /// name, are left out (see [`Fields::additions_to`]) and contribute no
    /// variables.
    pub fn fields(
        &mut self,
        fields: impl Into<SelectionArg>,
    ) -> Result<IndexMap<String, serde_json::Value>> {
        let fields = Fields::new().select(fields).additions_to(&self.selection);
        if fields.is_empty() {
            return Ok(IndexMap::new());
        }
        let output_type = self.operation_field
            .type_ref()
            .leaf_type(self.schema)
            .ok_or_else(|| TypedQueryBuildError::UnresolvedOutputType {
                operation_name: self.operation_name().to_string(),
            })?;
        let prepared = fields.prepare(output_type, self.schema)?;

        for (var_ref, type_ref) in prepared.var_ref_to_var_type() {
            self.operation_variables.insert(
                format!("${var_ref}"),
                serde_json::Value::String(type_ref.to_graphql_string()),
            );
        }
        let var_ref_to_var_value = prepared.var_ref_to_var_value();
        self.prepared.push(prepared);
        self.selection = self.selection.union(&fields);
        Ok(var_ref_to_var_value)
    }

    pub fn new(
        operation_kind: OperationKind,
        operation_field: &'schema types::Field,
        schema: &'schema Schema,
        settings: BuilderSettings,
    ) -> Self {
        Self {
            action_variables: IndexMap::new(),
            operation_field,
            operation_kind,
            operation_variables: IndexMap::new(),
            prepared: vec![],
            schema,
            selection: Fields::new(),
            settings,
        }
    }

    pub fn operation_field(&self) -> &'schema types::Field {
        self.operation_field
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    pub fn operation_name(&self) -> &'schema str {
        self.operation_field.name()
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// Pass `variables` as arguments of the root field.
    ///
    /// Each key must be an argument declared by the root field. With
    /// [`BuilderSettings::validate_variables`] disabled, undeclared keys are
    /// dropped instead of rejected. Returns the variables to submit.
    pub fn variables(
        &mut self,
        variables: IndexMap<String, serde_json::Value>,
    ) -> Result<IndexMap<String, serde_json::Value>> {
        let mut accepted = IndexMap::with_capacity(variables.len());
        for (key, value) in variables {
            let Some(input) = self.operation_field.arg(&key) else {
                if self.settings.validate_variables {
                    return Err(TypedQueryBuildError::UnsupportedOperationVariable {
                        operation_kind: self.operation_kind,
                        operation_name: self.operation_name().to_string(),
                        variable_name: key,
                    });
                }
                continue;
            };

            let prefixed_key = format!("${key}");
            self.operation_variables.insert(
                prefixed_key.to_owned(),
                serde_json::Value::String(input.type_ref().to_graphql_string()),
            );
            self.action_variables.insert(
                key.to_owned(),
                serde_json::Value::String(prefixed_key),
            );
            accepted.insert(key, value);
        }
        Ok(accepted)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypedQueryBuildError {
    #[error(transparent)]
    Prepare(#[from] PrepareError),

    #[error("Unable to resolve the output type of operation `{operation_name}`")]
    UnresolvedOutputType {
        operation_name: String,
    },

    #[error(
        "Input `{variable_name}` not supported for {operation_kind} operation \
        `{operation_name}`"
    )]
    UnsupportedOperationVariable {
        operation_kind: OperationKind,
        operation_name: String,
        variable_name: String,
    },
}
