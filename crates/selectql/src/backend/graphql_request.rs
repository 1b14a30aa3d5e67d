use indexmap::IndexMap;

/// A request as sent over the wire:
/// `{"query": ..., "variables": {...}, "operationName": ...}`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(default)]
    pub variables: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub operation_name: Option<String>,
}
impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: IndexMap::new(),
            operation_name: None,
        }
    }

    /// The JSON payload to POST for this request.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "query": self.query,
            "variables": self.variables,
            "operationName": self.operation_name,
        })
    }

    pub fn with_operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn with_variables(
        mut self,
        variables: IndexMap<String, serde_json::Value>,
    ) -> Self {
        self.variables = variables;
        self
    }
}
