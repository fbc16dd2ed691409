use icu_collator::{Collator, CollatorOptions};

use super::chain::RegistryChain;
use super::fee::{withdrawal_fee_label, DEPOSIT_FEE};
use super::token_support::token_support_label;

/// One row of the supported-chains table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedChain {
    pub id: u64,
    pub name: String,
    pub deposit_fee: String,
    pub withdrawal_fee: String,
    pub token_support: String,
}

impl From<&RegistryChain> for MatchedChain {
    fn from(chain: &RegistryChain) -> Self {
        Self {
            id: chain.id,
            name: chain.label_name().to_string(),
            deposit_fee: DEPOSIT_FEE.to_string(),
            withdrawal_fee: withdrawal_fee_label(chain.withdrawal_fee),
            token_support: token_support_label(chain),
        }
    }
}

/// Sorts rows by name with the root locale collation: accents sort with their base
/// letter and lowercase before uppercase. Names the collation treats as equal keep
/// their raw ordering so the output is deterministic.
pub fn sort_by_name(chains: &mut [MatchedChain]) {
    let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
        .expect("Should load the root collation from compiled data");

    chains.sort_by(|a, b| {
        collator
            .compare(&a.name, &b.name)
            .then_with(|| a.name.cmp(&b.name))
    });
}
