mod application;
mod config;
mod domain;
mod infrastructure;
mod prettyprint;

use std::process::ExitCode;

use crate::application::chain_table::chain_table_routine::ChainTableRoutine;
use crate::config::app_config::AppConfig;
use crate::prettyprint::prettyprint::PrettyFormatter;
use tracing::{instrument, Level};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

const LOG_LEVEL_VAR: &str = "DOCGEN_LOG_LEVEL";

fn setup_tracing() {
    let level = std::env::var(LOG_LEVEL_VAR)
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let indicatif_layer = IndicatifLayer::new();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PrettyFormatter::new(true))
        .with_writer(indicatif_layer.get_stderr_writer());

    Registry::default()
        .with(tracing_subscriber::filter::Targets::new().with_target("chain_table_docgen", level))
        .with(indicatif_layer)
        .with(stderr_layer)
        .init();
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

const EXIT_SUCCESS: u8 = 0;
const EXIT_FAILURE: u8 = 1;

/// Logs the outcome of `stage` and maps it to the process exit status.
fn exit_status<T, C: error_stack::Context>(stage: &str, result: &error_stack::Result<T, C>) -> u8 {
    match result {
        Ok(_) => {
            tracing::info!("✅ {stage}: OK");
            EXIT_SUCCESS
        }
        Err(report) => {
            tracing::error!("❌ {stage}: {:?}", report);
            EXIT_FAILURE
        }
    }
}

#[tokio::main]
#[instrument]
async fn main() -> ExitCode {
    setup_tracing();
    setup_panic_hook();

    let config = AppConfig::load();
    let status = exit_status("Configuration", &config);
    let Ok(config) = config else {
        return ExitCode::from(status);
    };
    tracing::debug!(?config, "Loaded configuration");

    let routine = ChainTableRoutine::from_config(&config);
    let result = routine.run().await;
    ExitCode::from(exit_status(routine.name(), &result))
}
