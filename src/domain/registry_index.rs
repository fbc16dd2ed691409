use std::collections::HashMap;

use super::chain::RegistryChain;

/// Registry chains keyed by chain id. On duplicate ids the last chain wins.
#[derive(Debug, Default)]
pub struct RegistryIndex {
    chains: HashMap<u64, RegistryChain>,
}

impl RegistryIndex {
    pub fn get(&self, id: u64) -> Option<&RegistryChain> {
        self.chains.get(&id)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl FromIterator<RegistryChain> for RegistryIndex {
    fn from_iter<I: IntoIterator<Item = RegistryChain>>(iter: I) -> Self {
        let chains = iter.into_iter().map(|chain| (chain.id, chain)).collect();
        Self { chains }
    }
}
