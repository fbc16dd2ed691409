use std::path::PathBuf;

use error_stack::ResultExt;
use thiserror::Error;
use tracing::instrument;

use super::join::match_chains;
use crate::config::app_config::AppConfig;
use crate::domain::registry_index::RegistryIndex;
use crate::infrastructure::chain_registry::api::ChainRegistryApi;
use crate::infrastructure::docs::table_renderer::render_table;
use crate::infrastructure::docs::writer::write_docs;
use crate::infrastructure::http::json_client::JsonClient;
use crate::infrastructure::network_status::api::NetworkStatusApi;

#[derive(Error, Debug)]
pub enum ChainTableError {
    #[error("failed to fetch networks from the network status API")]
    FetchNetworks,
    #[error("failed to fetch chains from the chain registry")]
    FetchRegistry,
    #[error("failed to write the supported chains table")]
    WriteTable,
}

/// Regenerates the supported-chains table from the network status and chain registry APIs.
#[derive(Debug)]
pub struct ChainTableRoutine {
    network_status: NetworkStatusApi,
    chain_registry: ChainRegistryApi,
    output_path: PathBuf,
    excluded_chain_id: u64,
}

impl ChainTableRoutine {
    pub fn new(
        network_status: NetworkStatusApi,
        chain_registry: ChainRegistryApi,
        output_path: PathBuf,
        excluded_chain_id: u64,
    ) -> Self {
        Self {
            network_status,
            chain_registry,
            output_path,
            excluded_chain_id,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let client = JsonClient::new();
        Self::new(
            NetworkStatusApi::new(client.clone(), config.network_status.clone()),
            ChainRegistryApi::new(client, config.chain_registry.clone()),
            PathBuf::from(&*config.output.path),
            config.excluded_chain_id,
        )
    }

    pub fn name(&self) -> &'static str {
        "ChainTableRoutine"
    }

    /// Fetches both sources one after the other, then renders and writes the table.
    /// Nothing is written unless both fetches succeed.
    #[instrument(skip(self), name = "ChainTableRoutine::run")]
    pub async fn run(&self) -> error_stack::Result<(), ChainTableError> {
        tracing::info!("Chains: ☁️  Fetching networks from the network status API");
        let networks = self
            .network_status
            .networks()
            .await
            .change_context(ChainTableError::FetchNetworks)?;

        tracing::info!("Chains: ☁️  Fetching chains from the chain registry");
        let index: RegistryIndex = self
            .chain_registry
            .chains()
            .await
            .change_context(ChainTableError::FetchRegistry)?
            .into_iter()
            .collect();
        if index.is_empty() {
            tracing::warn!("Chain registry returned no chains");
        }

        tracing::info!("Chains: 🔗 Matching networks against the registry");
        let matched = match_chains(&networks, &index, self.excluded_chain_id);
        tracing::info!(
            networks = networks.len(),
            registry = index.len(),
            matched = matched.len(),
            "Chains matched"
        );

        tracing::info!("Chains: 📝 Writing the supported chains table");
        write_docs(&self.output_path, &render_table(&matched))
            .await
            .change_context(ChainTableError::WriteTable)
            .attach_printable_lazy(|| format!("output: {}", self.output_path.display()))?;

        tracing::info!("Chains: ✅ Supported chains table is up to date");
        Ok(())
    }
}
