use super::chain::RegistryChain;

const MAX_LISTED_SYMBOLS: usize = 3;

/// The registry's `tokenSupport` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSupport<'a> {
    All,
    Limited,
    Other(&'a str),
    Unknown,
}

impl<'a> TokenSupport<'a> {
    pub fn of(chain: &'a RegistryChain) -> Self {
        match chain.token_support.as_deref() {
            Some("All") => TokenSupport::All,
            Some("Limited") => TokenSupport::Limited,
            Some(other) => TokenSupport::Other(other),
            None => TokenSupport::Unknown,
        }
    }
}

/// Bridgeable symbols of a chain: the native currency first, then ERC20 currencies
/// in registry order, without duplicates.
pub fn bridgeable_symbols(chain: &RegistryChain) -> Vec<&str> {
    let native = chain
        .currency
        .as_ref()
        .and_then(|currency| currency.bridgeable_symbol());

    let mut symbols: Vec<&str> = native.into_iter().collect();
    for symbol in chain
        .erc20_currencies()
        .iter()
        .filter_map(|currency| currency.bridgeable_symbol())
    {
        if !symbols.contains(&symbol) {
            symbols.push(symbol);
        }
    }
    symbols
}

/// Summarizes which assets a chain supports for bridging.
///
/// - `All` → `"All"`
/// - `Limited` → `"Limited (ETH, USDC)"` for up to three symbols, `"Limited (5 tokens)"` otherwise
/// - anything else → the raw value, or `"Unknown"` when absent
pub fn token_support_label(chain: &RegistryChain) -> String {
    match TokenSupport::of(chain) {
        TokenSupport::All => "All".to_string(),
        TokenSupport::Limited => limited_label(&bridgeable_symbols(chain)),
        TokenSupport::Other(raw) => raw.to_string(),
        TokenSupport::Unknown => "Unknown".to_string(),
    }
}

fn limited_label(symbols: &[&str]) -> String {
    match symbols.len() {
        1..=MAX_LISTED_SYMBOLS => format!("Limited ({})", symbols.join(", ")),
        count => format!("Limited ({count} tokens)"),
    }
}
