use crate::backend::Backend;
use crate::backend::BackendError;
use crate::backend::GraphQLRequest;

/// A [`Backend`] that POSTs requests as JSON to an HTTP endpoint.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    endpoint: String,
    raise_for_status: bool,
}
impl HttpBackend {
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    pub fn new(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint,
            raise_for_status: false,
        }
    }

    /// Fail with [`BackendError::HttpStatus`] on 4xx/5xx responses instead of
    /// trying to decode their body.
    pub fn raise_for_status(mut self, raise_for_status: bool) -> Self {
        self.raise_for_status = raise_for_status;
        self
    }

    pub fn with_client(mut self, client: reqwest::blocking::Client) -> Self {
        self.client = client;
        self
    }
}
impl Backend for HttpBackend {
    fn cache_key(&self) -> &str {
        self.endpoint.as_str()
    }

    fn execute_query(
        &self,
        request: &GraphQLRequest,
    ) -> Result<serde_json::Value, BackendError> {
        tracing::debug!(
            "Sending operation `{}` to `{}`",
            request.operation_name.as_deref().unwrap_or_default(),
            self.endpoint,
        );
        tracing::trace!("Query: {}", request.query);

        let response = self.client
            .post(self.endpoint.as_str())
            .json(&request.payload())
            .send()
            .map_err(|err| BackendError::Transport {
                endpoint: self.endpoint.to_owned(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if self.raise_for_status && (status.is_client_error() || status.is_server_error()) {
            return Err(BackendError::HttpStatus {
                endpoint: self.endpoint.to_owned(),
                status: status.as_u16(),
            });
        }

        response.json::<serde_json::Value>().map_err(|err| {
            BackendError::InvalidResponse {
                endpoint: self.endpoint.to_owned(),
                message: err.to_string(),
            }
        })
    }
}
