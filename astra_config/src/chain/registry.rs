/// Contains the compiled-in chain registry and the per chain descriptor
/// builders it is assembled from
use crate::{
    chain::{default_bech32_config, validate_prefix, Bip44, ChainInfo, Currency},
    config::Environment,
    constants,
    error::RegistryError,
};
use std::collections::HashSet;
use url::Url;

/// The ordered set of chains the wallet supports. Built once at startup from
/// compile-time constants and validated before anything downstream sees it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChainRegistry {
    chains: Vec<ChainInfo>,
}

impl ChainRegistry {
    /// Assembles and validates the registry. Chains appear in declaration
    /// order, mainnet first; downstream pickers render them as given.
    pub fn build(environment: Environment) -> Result<ChainRegistry, RegistryError> {
        let chains = vec![astra(environment), astra_testnet(environment)];
        validate(&chains)?;

        Ok(ChainRegistry { chains })
    }

    pub fn chains(&self) -> &[ChainInfo] {
        &self.chains
    }

    pub fn get(&self, chain_id: &str) -> Option<&ChainInfo> {
        self.chains.iter().find(|chain| chain.chain_id == chain_id)
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}

impl<'a> IntoIterator for &'a ChainRegistry {
    type Item = &'a ChainInfo;
    type IntoIter = std::slice::Iter<'a, ChainInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.chains.iter()
    }
}

fn validate(chains: &[ChainInfo]) -> Result<(), RegistryError> {
    let mut seen_ids = HashSet::new();
    for chain in chains {
        if !seen_ids.insert(chain.chain_id.as_str()) {
            return Err(RegistryError::DuplicateChainId(chain.chain_id.clone()));
        }
        if chain.currencies.is_empty() {
            return Err(RegistryError::EmptyCurrencies(chain.chain_id.clone()));
        }
        if chain.fee_currencies.is_empty() {
            return Err(RegistryError::EmptyFeeCurrencies(chain.chain_id.clone()));
        }

        let mut seen_denoms = HashSet::new();
        for currency in &chain.currencies {
            if !seen_denoms.insert(currency.coin_minimal_denom.as_str()) {
                return Err(RegistryError::DuplicateDenom(
                    chain.chain_id.clone(),
                    currency.coin_minimal_denom.clone(),
                ));
            }
        }
        if !seen_denoms.contains(chain.stake_currency.coin_minimal_denom.as_str()) {
            return Err(RegistryError::MissingStakeCurrency(
                chain.chain_id.clone(),
                chain.stake_currency.coin_minimal_denom.clone(),
            ));
        }

        validate_endpoint(&chain.rpc)?;
        validate_endpoint(&chain.rest)?;
        validate_prefix(&chain.bech32_config.bech32_prefix_acc_addr)?;
    }

    Ok(())
}

fn validate_endpoint(endpoint: &str) -> Result<(), RegistryError> {
    let url = Url::parse(endpoint)?;
    if !url.scheme().contains("http") {
        return Err(RegistryError::EndpointScheme(endpoint.to_string()));
    }

    Ok(())
}

/// The Astra mainnet descriptor.
pub fn astra(environment: Environment) -> ChainInfo {
    let asa = Currency {
        coin_denom: constants::ASTRA_DENOM.to_string(),
        coin_minimal_denom: constants::ASTRA_MINIMAL_DENOM.to_string(),
        coin_decimals: constants::ASTRA_DECIMALS,
        coin_gecko_id: Some(constants::ASTRA_COINGECKO_ID.to_string()),
    };
    let wallet_url = if environment.is_production() {
        constants::ASTRA_WALLET_URL
    } else {
        constants::ASTRA_WALLET_URL_DEV
    };
    let wallet_url_for_staking = if environment.is_production() {
        constants::ASTRA_STAKING_URL
    } else {
        constants::ASTRA_STAKING_URL_DEV
    };

    ChainInfo {
        rpc: constants::ASTRA_RPC_ENDPOINT.to_string(),
        rpc_config: constants::astra_rpc_config(),
        rest: constants::ASTRA_REST_ENDPOINT.to_string(),
        rest_config: constants::astra_rest_config(),
        chain_id: constants::ASTRA_CHAIN_ID.to_string(),
        chain_name: constants::ASTRA_CHAIN_NAME.to_string(),
        stake_currency: asa.clone(),
        wallet_url: wallet_url.to_string(),
        wallet_url_for_staking: wallet_url_for_staking.to_string(),
        bip44: Bip44 {
            coin_type: constants::ASTRA_COIN_TYPE,
        },
        bech32_config: default_bech32_config(constants::ASTRA_BECH32_PREFIX),
        currencies: vec![asa.clone()],
        fee_currencies: vec![asa],
        gas_price_step: Some(constants::default_gas_price_step()),
        features: constants::ASTRA_FEATURES
            .iter()
            .map(|f| f.to_string())
            .collect(),
    }
}

/// The Astra testnet descriptor. Same asset and address rules as mainnet,
/// different network and companion app deployments.
pub fn astra_testnet(environment: Environment) -> ChainInfo {
    let asa = Currency {
        coin_denom: constants::ASTRA_DENOM.to_string(),
        coin_minimal_denom: constants::ASTRA_MINIMAL_DENOM.to_string(),
        coin_decimals: constants::ASTRA_DECIMALS,
        coin_gecko_id: None,
    };
    let wallet_url = if environment.is_production() {
        constants::ASTRA_TESTNET_WALLET_URL
    } else {
        constants::ASTRA_TESTNET_WALLET_URL_DEV
    };
    let wallet_url_for_staking = if environment.is_production() {
        constants::ASTRA_TESTNET_STAKING_URL
    } else {
        constants::ASTRA_TESTNET_STAKING_URL_DEV
    };

    ChainInfo {
        rpc: constants::ASTRA_TESTNET_RPC_ENDPOINT.to_string(),
        rpc_config: constants::astra_testnet_rpc_config(),
        rest: constants::ASTRA_TESTNET_REST_ENDPOINT.to_string(),
        rest_config: constants::astra_testnet_rest_config(),
        chain_id: constants::ASTRA_TESTNET_CHAIN_ID.to_string(),
        chain_name: constants::ASTRA_TESTNET_CHAIN_NAME.to_string(),
        stake_currency: asa.clone(),
        wallet_url: wallet_url.to_string(),
        wallet_url_for_staking: wallet_url_for_staking.to_string(),
        bip44: Bip44 {
            coin_type: constants::ASTRA_COIN_TYPE,
        },
        bech32_config: default_bech32_config(constants::ASTRA_BECH32_PREFIX),
        currencies: vec![asa.clone()],
        fee_currencies: vec![asa],
        gas_price_step: Some(constants::default_gas_price_step()),
        features: constants::ASTRA_FEATURES
            .iter()
            .map(|f| f.to_string())
            .collect(),
    }
}
