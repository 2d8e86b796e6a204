use thiserror::Error;

// Higher level error: ConfigError
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Registry(#[from] RegistryError),
    #[error("{0}")]
    Locale(#[from] LocaleError),
}

// Lower level errors; should be used by higher level errors
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate chain id '{0}'")]
    DuplicateChainId(String),
    #[error("chain '{0}' has no currencies")]
    EmptyCurrencies(String),
    #[error("chain '{0}' has no fee currencies")]
    EmptyFeeCurrencies(String),
    #[error("chain '{0}' lists denom '{1}' more than once")]
    DuplicateDenom(String, String),
    #[error("chain '{0}' stake currency '{1}' is not in its currency list")]
    MissingStakeCurrency(String, String),
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("endpoint '{0}' must use http or https")]
    EndpointScheme(String),
    #[error("invalid bech32 prefix '{0}'")]
    InvalidBech32Prefix(String),
}

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("error parsing message fragment '{0}': {1}")]
    InvalidFragment(String, #[source] serde_json::error::Error),
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
}
