//! Decoded GraphQL responses.

use crate::backend::GraphQLRequest;
use crate::error::ClientError;
use serde::de::DeserializeOwned;

type Result<T> = std::result::Result<T, ClientError>;

/// An error reported in a response's `errors` list.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLError {
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphQLLocation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}
impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message.as_str())?;
        if let Some(path) = &self.path {
            f.write_str(" (at ")?;
            for (idx, segment) in path.iter().enumerate() {
                match (idx, segment) {
                    (_, PathSegment::Index(index)) => write!(f, "[{index}]")?,
                    (0, PathSegment::Field(name)) => f.write_str(name)?,
                    (_, PathSegment::Field(name)) => write!(f, ".{name}")?,
                }
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLLocation {
    pub line: u32,
    pub column: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

#[derive(Debug, Default, serde::Deserialize)]
struct ResponseBody {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<Vec<GraphQLError>>,
    #[serde(default)]
    extensions: Option<serde_json::Value>,
}

/// The outcome of executing an operation, along with the request that
/// produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLResponse {
    pub data: Option<serde_json::Value>,
    pub errors: Vec<GraphQLError>,
    pub extensions: Option<serde_json::Value>,
    pub raw: serde_json::Value,
    pub request: GraphQLRequest,
}
impl GraphQLResponse {
    /// Deserialize `data` into `T`, failing if the server reported errors.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        self.check_errors()?;
        let data = self.data.as_ref().ok_or(ClientError::MissingData {
            field: None,
        })?;
        serde_json::from_value(data.clone()).map_err(|err| ClientError::InvalidResponse {
            message: err.to_string(),
        })
    }

    /// All error messages joined with `; `, if there are any.
    pub fn error_message(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|err| err.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }

    /// Deserialize `data.{field}` into `T`, failing if the server reported
    /// errors.
    pub fn field<T: DeserializeOwned>(&self, field: &str) -> Result<T> {
        self.check_errors()?;
        let value = self.data
            .as_ref()
            .and_then(|data| data.get(field))
            .ok_or_else(|| ClientError::MissingData {
                field: Some(field.to_string()),
            })?;
        serde_json::from_value(value.clone()).map_err(|err| ClientError::InvalidResponse {
            message: format!("field `{field}`: {err}"),
        })
    }

    pub fn from_raw(request: GraphQLRequest, raw: serde_json::Value) -> Result<Self> {
        let body: ResponseBody = serde_json::from_value(raw.clone()).map_err(|err| {
            ClientError::InvalidResponse {
                message: err.to_string(),
            }
        })?;
        Ok(Self {
            data: body.data.filter(|data| !data.is_null()),
            errors: body.errors.unwrap_or_default(),
            extensions: body.extensions,
            raw,
            request,
        })
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some() && self.errors.is_empty()
    }

    fn check_errors(&self) -> Result<()> {
        match self.error_message() {
            Some(message) => Err(ClientError::GraphQLErrors { message }),
            None => Ok(()),
        }
    }
}
