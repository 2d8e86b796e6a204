use crate::{config, prelude::*};
use abscissa_core::{Command, Runnable};
use astra_config::{chain::ChainRegistry, Environment};
use clap::Parser;
use std::fs;

/// `chains set-default` subcommand
#[derive(Command, Debug, Parser)]
pub struct SetDefaultCmd {
    /// Chain id commands should fall back to from now on
    pub chain_id: String,
}

impl Runnable for SetDefaultCmd {
    /// Persist a new default chain in the config file
    fn run(&self) {
        let registry = ChainRegistry::build(Environment::Production).unwrap_or_else(|err| {
            status_err!("invalid embedded chain registry: {}", err);
            std::process::exit(1);
        });
        if registry.get(&self.chain_id).is_none() {
            status_err!("chain '{}' is not in the registry", self.chain_id);
            std::process::exit(1);
        }

        let path = config::init().unwrap_or_else(|err| {
            status_err!("can't initialize config file: {}", err);
            std::process::exit(1);
        });

        let mut new_config = (*APP.config()).clone();
        new_config.default_chain = self.chain_id.clone();
        let config_content = toml::to_string(&new_config).unwrap_or_else(|err| {
            status_err!("can't serialize config: {}", err);
            std::process::exit(1);
        });
        fs::write(&path, config_content).unwrap_or_else(|err| {
            status_err!("can't write config file: {}", err);
            std::process::exit(1);
        });

        status_ok!("Updated", "default chain set to {}", self.chain_id);
    }
}
