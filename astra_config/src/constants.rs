//! Compile-time constants describing the Astra networks and the wallet's
//! companion web apps. These are the only inputs to [`ChainRegistry::build`].
//!
//! [`ChainRegistry::build`]: crate::chain::ChainRegistry::build
use crate::chain::{EndpointConfig, GasPriceStep};

/// Chain id of Astra mainnet, EIP-155 style.
pub const ASTRA_CHAIN_ID: &str = "astra_11110-1";
pub const ASTRA_CHAIN_NAME: &str = "Astra";
pub const ASTRA_RPC_ENDPOINT: &str = "https://rpc.astranaut.io";
pub const ASTRA_REST_ENDPOINT: &str = "https://api.astranaut.io";

pub const ASTRA_TESTNET_CHAIN_ID: &str = "astra_11115-2";
pub const ASTRA_TESTNET_CHAIN_NAME: &str = "Astra Testnet";
pub const ASTRA_TESTNET_RPC_ENDPOINT: &str = "https://rpc.astranaut.dev";
pub const ASTRA_TESTNET_REST_ENDPOINT: &str = "https://api.astranaut.dev";

// Companion web app URLs. Production and development builds currently point
// at the same deployments, but each build mode keeps its own constant so the
// two can diverge without touching the registry builders.
pub const ASTRA_WALLET_URL: &str = "https://app.astranaut.io";
pub const ASTRA_WALLET_URL_DEV: &str = "https://app.astranaut.io";
pub const ASTRA_STAKING_URL: &str = "https://app.astranaut.io/stake";
pub const ASTRA_STAKING_URL_DEV: &str = "https://app.astranaut.io/stake";
pub const ASTRA_TESTNET_WALLET_URL: &str = "https://app.astranaut.dev";
pub const ASTRA_TESTNET_WALLET_URL_DEV: &str = "https://app.astranaut.dev";
pub const ASTRA_TESTNET_STAKING_URL: &str = "https://app.astranaut.dev/stake";
pub const ASTRA_TESTNET_STAKING_URL_DEV: &str = "https://app.astranaut.dev/stake";

/// Web origins granted elevated permissions by the extension's permission
/// broker. Order is preserved as declared; membership is what matters.
pub const PRIVILEGED_ORIGINS: &[&str] =
    &["https://app.astranaut.io", "https://app.astranaut.dev"];

/// SLIP-44 coin type. Astra is Ethermint based and uses the Ethereum type.
pub const ASTRA_COIN_TYPE: u32 = 60;
pub const ASTRA_BECH32_PREFIX: &str = "astra";

pub const ASTRA_DENOM: &str = "ASA";
pub const ASTRA_MINIMAL_DENOM: &str = "aastra";
pub const ASTRA_DECIMALS: u16 = 18;
pub const ASTRA_COINGECKO_ID: &str = "astra";

/// Capability tags advertised to downstream feature gating.
pub const ASTRA_FEATURES: &[&str] = &["ibc-transfer", "ibc-go"];

const ENDPOINT_TIMEOUT_MS: u64 = 10_000;

pub fn astra_rpc_config() -> EndpointConfig {
    EndpointConfig::with_timeout(ENDPOINT_TIMEOUT_MS)
}

pub fn astra_rest_config() -> EndpointConfig {
    EndpointConfig::with_timeout(ENDPOINT_TIMEOUT_MS)
}

pub fn astra_testnet_rpc_config() -> EndpointConfig {
    EndpointConfig::with_timeout(ENDPOINT_TIMEOUT_MS)
}

pub fn astra_testnet_rest_config() -> EndpointConfig {
    EndpointConfig::with_timeout(ENDPOINT_TIMEOUT_MS)
}

/// Fee market defaults in the minimal denom, shared by both networks.
pub fn default_gas_price_step() -> GasPriceStep {
    GasPriceStep {
        low: 25_000_000_000.0,
        average: 25_000_000_000.0,
        high: 40_000_000_000.0,
    }
}
