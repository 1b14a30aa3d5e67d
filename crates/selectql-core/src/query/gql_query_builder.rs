use indexmap::IndexMap;

/// Assembles a single-line GraphQL operation from pre-rendered parts:
///
/// `{operation} { {action}[({args})] [{ {fields} }] }`
///
/// Nothing here is checked against a schema; see
/// [`TypedQueryBuilder`](crate::TypedQueryBuilder) for that.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GQLQueryBuilder {
    action: String,
    fields: Option<String>,
    operation: String,
}
impl GQLQueryBuilder {
    /// Set the root field, rendered with `variables` as its arguments.
    pub fn action(
        mut self,
        action: &str,
        variables: Option<&IndexMap<String, serde_json::Value>>,
    ) -> Self {
        self.action = match variables {
            Some(variables) => render_arguments(action, variables),
            None => action.to_string(),
        };
        self
    }

    pub fn build(&self) -> String {
        let mut parts = vec![self.operation.as_str(), "{", self.action.as_str()];
        if let Some(fields) = self.fields.as_deref().filter(|f| !f.trim().is_empty()) {
            parts.extend(["{", fields, "}"]);
        }
        parts.push("}");
        collapse_whitespace(&parts.join(" "))
    }

    /// Set the already-rendered selection set of the root field.
    pub fn fields(mut self, fields: impl Into<String>) -> Self {
        self.fields = Some(fields.into());
        self
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operation header, e.g. `query film($id: ID)`.
    ///
    /// The variable declarations are only rendered for named operations.
    pub fn operation(
        mut self,
        kind: &str,
        name: &str,
        variables: Option<&IndexMap<String, serde_json::Value>>,
    ) -> Self {
        self.operation = if name.is_empty() {
            kind.to_string()
        } else {
            let header = format!("{kind} {name}");
            match variables {
                Some(variables) => render_arguments(&header, variables),
                None => header,
            }
        };
        self
    }
}
impl std::fmt::Display for GQLQueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.build().as_str())
    }
}

/// Replace every run of whitespace with a single space and trim both ends.
pub fn collapse_whitespace(query: &str) -> String {
    query.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Append `(key: value, ...)` to `initial`, or return it unchanged when
/// `variables` is empty.
///
/// Top-level values are written verbatim when they are strings (so that
/// `"$id"` and `"ID!"` come out bare) and as GraphQL literals otherwise.
/// Objects render as `key: {inner: value}` at any depth, with every nested
/// value written as a GraphQL literal.
pub fn render_arguments(
    initial: &str,
    variables: &IndexMap<String, serde_json::Value>,
) -> String {
    if variables.is_empty() {
        return initial.to_string();
    }

    let inputs = variables
        .iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(raw) => format!("{key}: {raw}"),
            other => format!("{key}: {}", graphql_literal(other)),
        })
        .collect::<Vec<_>>();
    format!("{initial}({})", inputs.join(", "))
}

fn graphql_literal(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Array(items) => format!(
            "[{}]",
            items.iter().map(graphql_literal).collect::<Vec<_>>().join(", "),
        ),
        serde_json::Value::Object(entries) => format!(
            "{{{}}}",
            entries.iter()
                .map(|(key, value)| format!("{key}: {}", graphql_literal(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        // JSON string escaping is a subset of what GraphQL string values
        // accept, and JSON numbers, booleans and null are valid literals.
        scalar => scalar.to_string(),
    }
}
