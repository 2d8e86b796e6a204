//! Compiled-in chain and localization configuration for the Astra wallet.
//!
//! Everything the wallet needs at startup is embedded in this crate: the
//! chain descriptors for Astra mainnet and testnet, the privileged origin
//! allow list, and the localized message bundles. [`AppConfig::build`] wires
//! it all together and validates the chain set, failing fast on bad data.
pub use config::{AppConfig, Environment};
pub use error::ConfigError;

pub mod chain;
pub mod config;
pub mod constants;
pub mod error;
pub mod locale;
