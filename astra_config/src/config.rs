/// Contains the bootstrap value the wallet constructs once at startup and
/// passes to every consumer, instead of scattering module level singletons
use crate::{
    chain::ChainRegistry,
    constants,
    error::ConfigError,
    locale::{self, LocaleBundle},
};
use serde::{Deserialize, Serialize};

/// Build mode of the wallet. Decided by the packaging pipeline, passed in
/// explicitly so both branches stay testable.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Everything the wallet needs at startup: the validated chain registry, the
/// privileged origin allow list, and one assembled bundle per supported
/// locale.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub chains: ChainRegistry,
    pub privileged_origins: Vec<String>,
    pub locales: Vec<LocaleBundle>,
}

impl AppConfig {
    /// Builds and validates the whole configuration. Any error here means
    /// the embedded data is malformed and startup must abort.
    pub fn build(environment: Environment) -> Result<AppConfig, ConfigError> {
        let chains = ChainRegistry::build(environment)?;
        let locales = locale::SUPPORTED_LOCALES
            .iter()
            .map(|code| locale::bundle(code))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AppConfig {
            environment,
            chains,
            privileged_origins: privileged_origins(),
            locales,
        })
    }

    pub fn bundle(&self, locale: &str) -> Option<&LocaleBundle> {
        self.locales.iter().find(|bundle| bundle.locale() == locale)
    }

    /// Membership check for the permission broker. The origin list itself
    /// stays in declared order for display.
    pub fn is_privileged_origin(&self, origin: &str) -> bool {
        self.privileged_origins.iter().any(|o| o == origin)
    }
}

/// The origin allow list exactly as declared, no dedup, no reorder.
pub fn privileged_origins() -> Vec<String> {
    constants::PRIVILEGED_ORIGINS
        .iter()
        .map(|origin| origin.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;

    #[assay]
    fn builds_for_both_environments() {
        let production = AppConfig::build(Environment::Production).unwrap();
        let development = AppConfig::build(Environment::Development).unwrap();

        assert_eq!(production.environment, Environment::Production);
        assert_eq!(development.environment, Environment::Development);
        assert_eq!(production.chains.len(), development.chains.len());
    }

    #[assay]
    fn exposes_one_bundle_per_supported_locale() {
        let config = AppConfig::build(Environment::Production).unwrap();

        assert_eq!(config.locales.len(), locale::SUPPORTED_LOCALES.len());
        for code in locale::SUPPORTED_LOCALES {
            assert!(config.bundle(code).is_some());
        }
        assert!(config.bundle("ja").is_none());
    }

    #[assay]
    fn origins_pass_through_unchanged() {
        let config = AppConfig::build(Environment::Production).unwrap();

        assert_eq!(config.privileged_origins, privileged_origins());
        assert_eq!(
            config.privileged_origins,
            vec![
                "https://app.astranaut.io".to_string(),
                "https://app.astranaut.dev".to_string(),
            ]
        );
    }

    #[assay]
    fn checks_origin_membership() {
        let config = AppConfig::build(Environment::Production).unwrap();

        assert!(config.is_privileged_origin("https://app.astranaut.io"));
        assert!(!config.is_privileged_origin("https://evil.example.com"));
    }

    #[assay]
    fn environment_reports_production() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
    }
}
