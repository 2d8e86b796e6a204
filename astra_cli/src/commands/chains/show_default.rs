use crate::prelude::*;
use abscissa_core::{Command, Runnable};
use astra_config::{chain::ChainRegistry, Environment};
use clap::Parser;

/// `chains show-default` subcommand
#[derive(Command, Debug, Parser)]
pub struct ShowDefaultCmd {}

impl Runnable for ShowDefaultCmd {
    /// Dump the configured default chain descriptor as JSON
    fn run(&self) {
        let config = APP.config();
        let registry = ChainRegistry::build(Environment::Production).unwrap_or_else(|err| {
            status_err!("invalid embedded chain registry: {}", err);
            std::process::exit(1);
        });

        match registry.get(&config.default_chain) {
            Some(chain_details) => {
                println!("{}", serde_json::to_string_pretty(chain_details).unwrap())
            }
            None => {
                status_err!(
                    "default chain '{}' is not in the registry",
                    config.default_chain
                );
                std::process::exit(1);
            }
        }
    }
}
