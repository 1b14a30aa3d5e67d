/// Knobs for [`TypedQueryBuilder`](crate::TypedQueryBuilder).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct BuilderSettings {
    /// Reject operation variables the root field does not declare. When
    /// disabled, such variables are silently dropped.
    pub validate_variables: bool,
}
impl std::default::Default for BuilderSettings {
    fn default() -> Self {
        Self {
            validate_variables: true,
        }
    }
}
