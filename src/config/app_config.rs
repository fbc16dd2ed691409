use config::{builder::DefaultState, Config, ConfigBuilder, Environment};
use error_stack::ResultExt;
use thiserror::Error;

use super::api_config::{ChainRegistryConfig, NetworkStatusConfig};
use super::output_config::OutputConfig;

/// Chain id carrying no bridging relevance; never listed in the table.
pub const DEFAULT_EXCLUDED_CHAIN_ID: u64 = 21_000_000;

const DEFAULT_CONFIG_PATH: &str = "Config";
const ENV_PREFIX: &str = "DOCGEN";

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("failed to build configuration from '{config_path}'")]
    Build { config_path: String },
    #[error("configuration is invalid")]
    Deserialize,
    #[error("missing property: {0}")]
    MissingProperty(&'static str),
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub network_status: NetworkStatusConfig,
    pub chain_registry: ChainRegistryConfig,
    pub output: OutputConfig,
    pub excluded_chain_id: u64,
}

impl AppConfig {
    /// Layers the built-in defaults, the optional `Config` file (renamed via `CONFIG_PATH`)
    /// and `DOCGEN_*` environment variables, in that order of precedence.
    pub fn load() -> error_stack::Result<Self, AppConfigError> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let builder = Self::defaults()?
            .add_source(config::File::with_name(&config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::from_builder(builder, &config_path)
    }

    pub fn defaults() -> error_stack::Result<ConfigBuilder<DefaultState>, AppConfigError> {
        Config::builder()
            .set_default("excluded_chain_id", DEFAULT_EXCLUDED_CHAIN_ID as i64)
            .and_then(|builder| {
                builder.set_default("output.path", OutputConfig::DEFAULT_PATH.to_string())
            })
            .change_context(AppConfigError::Build {
                config_path: DEFAULT_CONFIG_PATH.to_string(),
            })
    }

    pub fn from_builder(
        builder: ConfigBuilder<DefaultState>,
        config_path: &str,
    ) -> error_stack::Result<Self, AppConfigError> {
        let app_config: AppConfig = builder
            .build()
            .change_context_lazy(|| AppConfigError::Build {
                config_path: config_path.to_string(),
            })?
            .try_deserialize()
            .change_context(AppConfigError::Deserialize)
            .attach_printable_lazy(|| {
                format!("Make sure all required fields are present in '{config_path}' or the {ENV_PREFIX}_* environment")
            })?;

        app_config.validate()?;
        Ok(app_config)
    }

    fn validate(&self) -> error_stack::Result<(), AppConfigError> {
        if self.network_status.api_key.trim().is_empty() {
            return Err(AppConfigError::MissingProperty("network_status.api_key").into());
        }
        if self.network_status.url.trim().is_empty() {
            return Err(AppConfigError::MissingProperty("network_status.url").into());
        }
        if self.chain_registry.url.trim().is_empty() {
            return Err(AppConfigError::MissingProperty("chain_registry.url").into());
        }
        Ok(())
    }
}
