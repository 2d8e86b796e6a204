/// Contains the embedded message fragments for each supported locale and the
/// entry points that assemble them into bundles
use crate::error::LocaleError;

pub use self::bundle::*;

pub mod bundle;

/// Locale codes the wallet ships translations for.
pub const SUPPORTED_LOCALES: &[&str] = &["en", "vi"];

const EN_COMMON: &str = include_str!("../etc/locales/en/common.json");
const EN_ACCOUNT: &str = include_str!("../etc/locales/en/account.json");
const EN_STAKING: &str = include_str!("../etc/locales/en/staking.json");
const EN_TRANSFER: &str = include_str!("../etc/locales/en/transfer.json");
const EN_ASTRA: &str = include_str!("../etc/locales/en/astra.json");

const VI_COMMON: &str = include_str!("../etc/locales/vi/common.json");
const VI_ACCOUNT: &str = include_str!("../etc/locales/vi/account.json");
const VI_STAKING: &str = include_str!("../etc/locales/vi/staking.json");
const VI_TRANSFER: &str = include_str!("../etc/locales/vi/transfer.json");
const VI_ASTRA: &str = include_str!("../etc/locales/vi/astra.json");

/// The English fragments in merge order. The Astra brand override fragment
/// comes last so its keys shadow the stock wallet strings.
pub fn english_fragments() -> Result<Vec<MessageFragment>, LocaleError> {
    Ok(vec![
        MessageFragment::from_json("common", EN_COMMON)?,
        MessageFragment::from_json("account", EN_ACCOUNT)?,
        MessageFragment::from_json("staking", EN_STAKING)?,
        MessageFragment::from_json("transfer", EN_TRANSFER)?,
        MessageFragment::from_json("astra", EN_ASTRA)?,
    ])
}

/// The Vietnamese fragments in merge order.
pub fn vietnamese_fragments() -> Result<Vec<MessageFragment>, LocaleError> {
    Ok(vec![
        MessageFragment::from_json("common", VI_COMMON)?,
        MessageFragment::from_json("account", VI_ACCOUNT)?,
        MessageFragment::from_json("staking", VI_STAKING)?,
        MessageFragment::from_json("transfer", VI_TRANSFER)?,
        MessageFragment::from_json("astra", VI_ASTRA)?,
    ])
}

pub fn english_bundle() -> Result<LocaleBundle, LocaleError> {
    Ok(assemble("en", english_fragments()?))
}

pub fn vietnamese_bundle() -> Result<LocaleBundle, LocaleError> {
    Ok(assemble("vi", vietnamese_fragments()?))
}

/// Assembles the bundle for a locale code from [`SUPPORTED_LOCALES`].
pub fn bundle(locale: &str) -> Result<LocaleBundle, LocaleError> {
    match locale {
        "en" => english_bundle(),
        "vi" => vietnamese_bundle(),
        _ => Err(LocaleError::UnsupportedLocale(locale.to_string())),
    }
}
