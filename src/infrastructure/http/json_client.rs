use error_stack::ResultExt;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed")]
    Http,
    #[error("failed to read response body")]
    Body,
    #[error("JSON parsing failed")]
    Json,
}

/// Issues a single GET and parses the whole body as JSON.
///
/// There is no timeout and no retry: any failure is returned to the caller as is.
#[derive(Debug, Clone, Default)]
pub struct JsonClient {
    client: Client,
}

impl JsonClient {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self, headers))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> error_stack::Result<T, FetchError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(*name, *value)
            });

        let response = request
            .send()
            .await
            .change_context(FetchError::Http)
            .attach_printable_lazy(|| format!("GET {url}"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Non-success status, parsing body anyway");
        }

        let text = response
            .text()
            .await
            .change_context(FetchError::Body)
            .attach_printable_lazy(|| format!("GET {url}"))?;

        tracing::debug!(%status, bytes = text.len(), "Response received");

        serde_json::from_str(&text)
            .change_context(FetchError::Json)
            .attach_printable_lazy(|| format!("GET {url} returned status {status}"))
    }
}
