use crate::backend::GraphQLRequest;
use crate::client::Client;
use crate::error::ClientError;
use crate::response::GraphQLResponse;
use indexmap::IndexMap;
use selectql_core::types;
use selectql_core::OperationKind;
use selectql_core::SelectionArg;
use selectql_core::TypedQueryBuilder;

type Result<T> = std::result::Result<T, ClientError>;

/// The root operations of one [`OperationKind`], looked up by name.
///
/// ```ignore
/// let film = client.query().get("film")?;
/// ```
#[derive(Clone, Debug)]
pub struct OperationServiceProxy<'client> {
    client: &'client Client,
    operation_kind: OperationKind,
    operations: IndexMap<&'client str, &'client types::Field>,
}
impl<'client> OperationServiceProxy<'client> {
    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Shorthand for `get(name)`, then `variables(...)`, `select(...)` and
    /// `execute()`.
    pub fn execute<K, V>(
        &self,
        name: &str,
        variables: impl IntoIterator<Item = (K, V)>,
        selection: impl Into<SelectionArg>,
    ) -> Result<GraphQLResponse>
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.get(name)?
            .variables(variables)?
            .select(selection)?
            .execute()
    }

    pub fn get(&self, name: &str) -> Result<OperationProxy<'client>> {
        let operation_field = self.operations
            .get(name)
            .copied()
            .ok_or_else(|| ClientError::OperationNotFound {
                name: name.to_string(),
                operation_kind: self.operation_kind,
            })?;
        Ok(OperationProxy::new(self.client, self.operation_kind, operation_field))
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'client str, &'client types::Field)> + '_ {
        self.operations.iter().map(|(name, field)| (*name, *field))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub(crate) fn new(client: &'client Client, operation_kind: OperationKind) -> Self {
        let operations: IndexMap<&'client str, &'client types::Field> = client.schema()
            .root_type(operation_kind)
            .map(|root_type| {
                root_type.fields()
                    .iter()
                    .map(|(name, field)| (name.as_str(), field))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            client,
            operation_kind,
            operations,
        }
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    /// Names of every operation on this proxy, in schema order.
    pub fn supported_bindings(&self) -> Vec<&'client str> {
        self.operations.keys().copied().collect()
    }
}

/// A single root operation being assembled: its arguments, its selection,
/// and the variables that will be submitted with it.
#[derive(Clone, Debug)]
pub struct OperationProxy<'client> {
    builder: TypedQueryBuilder<'client>,
    client: &'client Client,
    variables: IndexMap<String, serde_json::Value>,
}
impl<'client> OperationProxy<'client> {
    pub fn execute(&self) -> Result<GraphQLResponse> {
        let request = self.request();
        tracing::debug!(
            "Executing {} operation `{}`",
            self.operation_kind(),
            self.name(),
        );
        tracing::trace!("Operation document: {}", request.query);
        self.client.execute(self.operation_kind(), request)
    }

    pub fn name(&self) -> &'client str {
        self.builder.operation_name()
    }

    fn new(
        client: &'client Client,
        operation_kind: OperationKind,
        operation_field: &'client types::Field,
    ) -> Self {
        Self {
            builder: TypedQueryBuilder::new(
                operation_kind,
                operation_field,
                client.schema(),
                client.settings().builder_settings(),
            ),
            client,
            variables: IndexMap::new(),
        }
    }

    pub fn operation_field(&self) -> &'client types::Field {
        self.builder.operation_field()
    }

    pub fn operation_kind(&self) -> OperationKind {
        self.builder.operation_kind()
    }

    /// The operation document as it would be sent.
    pub fn query(&self) -> String {
        self.builder.build()
    }

    pub fn request(&self) -> GraphQLRequest {
        GraphQLRequest::new(self.query())
            .with_variables(self.variables.clone())
            .with_operation_name(self.name())
    }

    /// Add `selection` to the fields requested from the operation's output
    /// type. Fails if any field, argument or directive is not declared by
    /// the schema.
    pub fn select(mut self, selection: impl Into<SelectionArg>) -> Result<Self> {
        let variables = self.builder.fields(selection)?;
        self.variables.extend(variables);
        Ok(self)
    }

    /// Pass arguments to the root field.
    pub fn variables<K, V>(
        mut self,
        variables: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self>
    where
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        let variables = variables
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect::<IndexMap<_, _>>();
        let accepted = self.builder.variables(variables)?;
        self.variables.extend(accepted);
        Ok(self)
    }

    /// The values that will be submitted for the operation's variables.
    pub fn variable_values(&self) -> &IndexMap<String, serde_json::Value> {
        &self.variables
    }
}
