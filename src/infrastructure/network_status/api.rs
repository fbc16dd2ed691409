use serde::Deserialize;
use tracing::instrument;

use crate::config::api_config::NetworkStatusConfig;
use crate::domain::chain::NetworkEntry;
use crate::infrastructure::http::json_client::{FetchError, JsonClient};

#[derive(Debug, Deserialize)]
pub struct NetworksResponse {
    pub networks: Option<Vec<NetworkEntry>>,
}

#[derive(Debug, Clone)]
pub struct NetworkStatusApi {
    client: JsonClient,
    config: NetworkStatusConfig,
}

impl NetworkStatusApi {
    pub fn new(client: JsonClient, config: NetworkStatusConfig) -> Self {
        Self { client, config }
    }

    /// Lists every network known to the status API. A response without a
    /// `networks` list yields no networks.
    #[instrument(skip(self))]
    pub async fn networks(&self) -> error_stack::Result<Vec<NetworkEntry>, FetchError> {
        let headers = [
            ("accept", "application/json"),
            (&*self.config.api_key_header, &*self.config.api_key),
        ];

        let response: NetworksResponse = self.client.get(&self.config.url, &headers).await?;

        let networks = response.networks.unwrap_or_else(|| {
            tracing::warn!("Network status response has no networks");
            Vec::new()
        });
        tracing::info!(count = networks.len(), "Fetched networks");
        Ok(networks)
    }
}
