use crate::domain::chain::NetworkEntry;
use crate::domain::matched_chain::{sort_by_name, MatchedChain};
use crate::domain::registry_index::RegistryIndex;

/// Joins networks against the registry, dropping `excluded_chain_id` and networks the
/// registry does not know, and returns the rows sorted by name.
pub fn match_chains(
    networks: &[NetworkEntry],
    index: &RegistryIndex,
    excluded_chain_id: u64,
) -> Vec<MatchedChain> {
    let mut matched: Vec<MatchedChain> = networks
        .iter()
        .filter(|network| network.id != excluded_chain_id)
        .filter_map(|network| {
            let chain = index.get(network.id);
            if chain.is_none() {
                tracing::trace!(id = network.id, "No registry chain, skipping");
            }
            chain
        })
        .map(MatchedChain::from)
        .collect();

    sort_by_name(&mut matched);
    matched
}
