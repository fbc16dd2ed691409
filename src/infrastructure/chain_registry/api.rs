use serde::Deserialize;
use tracing::instrument;

use crate::config::api_config::ChainRegistryConfig;
use crate::domain::chain::RegistryChain;
use crate::infrastructure::http::json_client::{FetchError, JsonClient};

#[derive(Debug, Deserialize)]
pub struct ChainsResponse {
    pub chains: Vec<RegistryChain>,
}

#[derive(Debug, Clone)]
pub struct ChainRegistryApi {
    client: JsonClient,
    config: ChainRegistryConfig,
}

impl ChainRegistryApi {
    pub fn new(client: JsonClient, config: ChainRegistryConfig) -> Self {
        Self { client, config }
    }

    /// Lists every registry chain. The `chains` list is required.
    #[instrument(skip(self))]
    pub async fn chains(&self) -> error_stack::Result<Vec<RegistryChain>, FetchError> {
        let response: ChainsResponse = self.client.get(&self.config.url, &[]).await?;

        tracing::info!(count = response.chains.len(), "Fetched registry chains");
        Ok(response.chains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(url: String) -> ChainRegistryApi {
        ChainRegistryApi::new(JsonClient::new(), ChainRegistryConfig { url: url.into() })
    }

    #[tokio::test]
    async fn test_chains() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/chains")
            .with_status(200)
            .with_body(
                r#"{ "chains": [
                    { "id": 1, "displayName": "Ethereum", "tokenSupport": "All" },
                    { "id": 10, "name": "optimism", "withdrawalFee": 3 }
                ] }"#,
            )
            .create_async()
            .await;

        let chains = api(format!("{}/chains", server.url()))
            .chains()
            .await
            .unwrap();

        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].label_name(), "Ethereum");
        assert_eq!(chains[1].withdrawal_fee, Some(3.0));
    }

    #[tokio::test]
    async fn test_missing_chains_fails() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/chains")
            .with_status(200)
            .with_body(r#"{ "items": [] }"#)
            .create_async()
            .await;

        let report = api(format!("{}/chains", server.url()))
            .chains()
            .await
            .unwrap_err();

        assert!(matches!(report.current_context(), FetchError::Json));
    }
}
