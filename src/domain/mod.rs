pub mod chain;
pub mod fee;
pub mod matched_chain;
pub mod registry_index;
pub mod token_support;
