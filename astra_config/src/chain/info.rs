/// Contains models for serializing and deserializing a chain descriptor in
/// the wire format the wallet frontends consume (camelCase keys)
use crate::chain::Bech32Config;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ChainInfo {
    pub rpc: String,
    pub rpc_config: EndpointConfig,
    pub rest: String,
    pub rest_config: EndpointConfig,
    pub chain_id: String,
    pub chain_name: String,
    pub stake_currency: Currency,
    pub wallet_url: String,
    pub wallet_url_for_staking: String,
    pub bip44: Bip44,
    pub bech32_config: Bech32Config,
    #[serde(skip_serializing_if = "Vec::is_empty", default = "Vec::new")]
    pub currencies: Vec<Currency>,
    #[serde(skip_serializing_if = "Vec::is_empty", default = "Vec::new")]
    pub fee_currencies: Vec<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price_step: Option<GasPriceStep>,
    #[serde(skip_serializing_if = "Vec::is_empty", default = "Vec::new")]
    pub features: Vec<String>,
}

/// Transport tuning passed through to the frontend HTTP client untouched.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointConfig {
    pub timeout_ms: u64,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Currency {
    pub coin_denom: String,
    pub coin_minimal_denom: String,
    pub coin_decimals: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin_gecko_id: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Bip44 {
    pub coin_type: u32,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GasPriceStep {
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

impl ChainInfo {
    /// Looks up a currency by its base unit denom.
    pub fn find_currency(&self, minimal_denom: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|currency| currency.coin_minimal_denom == minimal_denom)
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }
}

impl EndpointConfig {
    pub fn with_timeout(timeout_ms: u64) -> EndpointConfig {
        EndpointConfig {
            timeout_ms,
            headers: HashMap::new(),
        }
    }
}

impl Currency {
    /// Renders a base unit integer amount in display units, shifting the
    /// decimal point by `coin_decimals` and trimming trailing zeros.
    pub fn to_display_amount(&self, minimal_amount: &str) -> String {
        let decimals = self.coin_decimals as usize;
        if decimals == 0 || minimal_amount == "0" {
            return minimal_amount.to_string();
        }

        let padded = if minimal_amount.len() <= decimals {
            format!(
                "{}{}",
                "0".repeat(decimals - minimal_amount.len() + 1),
                minimal_amount
            )
        } else {
            minimal_amount.to_string()
        };

        let (integer, fraction) = padded.split_at(padded.len() - decimals);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            integer.to_string()
        } else {
            format!("{}.{}", integer, fraction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;
    use crate::constants;

    fn asa() -> Currency {
        Currency {
            coin_denom: constants::ASTRA_DENOM.to_string(),
            coin_minimal_denom: constants::ASTRA_MINIMAL_DENOM.to_string(),
            coin_decimals: constants::ASTRA_DECIMALS,
            coin_gecko_id: Some(constants::ASTRA_COINGECKO_ID.to_string()),
        }
    }

    #[assay]
    fn finds_currency_by_minimal_denom() {
        let info = ChainInfo {
            currencies: vec![asa()],
            ..Default::default()
        };

        assert!(info.find_currency("aastra").is_some());
        assert!(info.find_currency("uatom").is_none());
    }

    #[assay]
    fn reports_features() {
        let info = ChainInfo {
            features: vec!["ibc-transfer".to_string(), "ibc-go".to_string()],
            ..Default::default()
        };

        assert!(info.has_feature("ibc-transfer"));
        assert!(!info.has_feature("eth-key-sign"));
    }

    #[assay]
    fn converts_minimal_amounts_to_display_units() {
        let asa = asa();

        assert_eq!(asa.to_display_amount("0"), "0");
        assert_eq!(asa.to_display_amount("1000000000000000000"), "1");
        assert_eq!(asa.to_display_amount("1500000000000000000"), "1.5");
        assert_eq!(asa.to_display_amount("1"), "0.000000000000000001");
        assert_eq!(asa.to_display_amount("123450000000000000000"), "123.45");
    }

    #[assay]
    fn zero_decimals_is_identity() {
        let currency = Currency {
            coin_denom: "UNIT".to_string(),
            coin_minimal_denom: "unit".to_string(),
            coin_decimals: 0,
            coin_gecko_id: None,
        };

        assert_eq!(currency.to_display_amount("42"), "42");
    }

    #[assay]
    fn serializes_with_camel_case_keys() {
        let info = ChainInfo {
            chain_id: constants::ASTRA_CHAIN_ID.to_string(),
            stake_currency: asa(),
            gas_price_step: Some(constants::default_gas_price_step()),
            ..Default::default()
        };
        let json = serde_json::to_string(&info).unwrap();

        assert!(json.contains("\"chainId\":\"astra_11110-1\""));
        assert!(json.contains("\"coinMinimalDenom\":\"aastra\""));
        assert!(json.contains("\"gasPriceStep\""));
        // absent optional sections stay out of the payload
        assert!(!json.contains("\"currencies\""));
        assert!(!json.contains("\"headers\""));
    }
}
