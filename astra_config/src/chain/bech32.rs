/// Contains the bech32 address prefix set for a chain and the conventional
/// derivation of all six prefixes from a single human readable part
use crate::error::RegistryError;
use serde::{Deserialize, Serialize};

// The registered hrp length limit from BIP-173.
const MAX_PREFIX_LEN: usize = 83;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Bech32Config {
    pub bech32_prefix_acc_addr: String,
    pub bech32_prefix_acc_pub: String,
    pub bech32_prefix_val_addr: String,
    pub bech32_prefix_val_pub: String,
    pub bech32_prefix_cons_addr: String,
    pub bech32_prefix_cons_pub: String,
}

impl Bech32Config {
    /// Checks that `address` is valid bech32 and carries this chain's
    /// account prefix.
    pub fn is_valid_address(&self, address: &str) -> bool {
        match bech32::decode(address) {
            Ok((hrp, _, _)) => hrp == self.bech32_prefix_acc_addr,
            Err(_) => false,
        }
    }
}

/// Derives the full prefix set from a bare human readable part following the
/// Cosmos SDK convention: `{p}`, `{p}pub`, `{p}valoper`, `{p}valoperpub`,
/// `{p}valcons`, `{p}valconspub`.
pub fn default_bech32_config(prefix: &str) -> Bech32Config {
    Bech32Config {
        bech32_prefix_acc_addr: prefix.to_string(),
        bech32_prefix_acc_pub: format!("{}pub", prefix),
        bech32_prefix_val_addr: format!("{}valoper", prefix),
        bech32_prefix_val_pub: format!("{}valoperpub", prefix),
        bech32_prefix_cons_addr: format!("{}valcons", prefix),
        bech32_prefix_cons_pub: format!("{}valconspub", prefix),
    }
}

/// A usable human readable part is non-empty, at most 83 characters, and
/// lowercase alphanumeric ASCII.
pub fn validate_prefix(prefix: &str) -> Result<(), RegistryError> {
    if prefix.is_empty()
        || prefix.len() > MAX_PREFIX_LEN
        || !prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    {
        return Err(RegistryError::InvalidBech32Prefix(prefix.to_string()));
    }

    Ok(())
}
