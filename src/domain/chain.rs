use serde::Deserialize;

/// A chain as listed by the network status API. Only the id is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NetworkEntry {
    pub id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub symbol: Option<String>,
    pub supports_bridging: Option<bool>,
}

impl Currency {
    /// The symbol, if this currency can be bridged.
    pub fn bridgeable_symbol(&self) -> Option<&str> {
        if self.supports_bridging.unwrap_or_default() {
            self.symbol.as_deref()
        } else {
            None
        }
    }
}

/// A chain as described by the chain registry API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryChain {
    pub id: u64,
    pub display_name: Option<String>,
    pub name: Option<String>,
    pub token_support: Option<String>,
    pub currency: Option<Currency>,
    pub erc20_currencies: Option<Vec<Currency>>,
    pub withdrawal_fee: Option<f64>,
}

impl RegistryChain {
    /// `displayName`, falling back to `name`.
    pub fn label_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// ERC20 currencies; absent and `null` both mean none.
    pub fn erc20_currencies(&self) -> &[Currency] {
        self.erc20_currencies.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_chain_deserializes_camel_case() {
        let chain: RegistryChain = serde_json::from_str(
            r#"{
                "id": 8453,
                "name": "base",
                "displayName": "Base",
                "tokenSupport": "Limited",
                "currency": { "symbol": "ETH", "supportsBridging": true, "decimals": 18 },
                "erc20Currencies": [{ "symbol": "USDC", "supportsBridging": false }],
                "withdrawalFee": 2
            }"#,
        )
        .unwrap();

        assert_eq!(chain.id, 8453);
        assert_eq!(chain.label_name(), "Base");
        assert_eq!(chain.token_support.as_deref(), Some("Limited"));
        assert_eq!(chain.currency.as_ref().unwrap().bridgeable_symbol(), Some("ETH"));
        assert_eq!(chain.erc20_currencies().len(), 1);
        assert_eq!(chain.erc20_currencies()[0].bridgeable_symbol(), None);
        assert_eq!(chain.withdrawal_fee, Some(2.0));
    }

    #[test]
    fn test_registry_chain_optional_fields() {
        let chain: RegistryChain = serde_json::from_str(r#"{ "id": 1 }"#).unwrap();

        assert_eq!(chain, RegistryChain { id: 1, ..Default::default() });
        assert_eq!(chain.label_name(), "");
        assert!(chain.erc20_currencies().is_empty());
    }

    #[test]
    fn test_registry_chain_null_fields() {
        let chain: RegistryChain = serde_json::from_str(
            r#"{
                "id": 1,
                "displayName": null,
                "name": "ethereum",
                "tokenSupport": null,
                "currency": { "symbol": "ETH", "supportsBridging": null },
                "erc20Currencies": null,
                "withdrawalFee": null
            }"#,
        )
        .unwrap();

        assert_eq!(chain.label_name(), "ethereum");
        assert!(chain.token_support.is_none());
        assert_eq!(chain.currency.as_ref().unwrap().bridgeable_symbol(), None);
        assert!(chain.erc20_currencies().is_empty());
        assert!(chain.withdrawal_fee.is_none());
    }

    #[test]
    fn test_null_bridging_flag_in_erc20_list() {
        let chain: RegistryChain = serde_json::from_str(
            r#"{
                "id": 1,
                "erc20Currencies": [
                    { "symbol": "USDC", "supportsBridging": null },
                    { "symbol": null, "supportsBridging": true },
                    { "symbol": "USDT", "supportsBridging": true }
                ]
            }"#,
        )
        .unwrap();

        let symbols: Vec<_> = chain
            .erc20_currencies()
            .iter()
            .filter_map(Currency::bridgeable_symbol)
            .collect();
        assert_eq!(symbols, vec!["USDT"]);
    }

    #[test]
    fn test_label_name_falls_back_to_name() {
        let chain = RegistryChain {
            id: 10,
            name: Some("optimism".to_string()),
            ..Default::default()
        };

        assert_eq!(chain.label_name(), "optimism");
    }
}
