pub mod chain_registry;
pub mod docs;
pub mod http;
pub mod network_status;
