use crate::prelude::*;
use abscissa_core::{Command, Runnable};
use astra_config::{chain::ChainRegistry, Environment};
use clap::Parser;

/// `chains list` subcommand
#[derive(Command, Debug, Parser)]
pub struct ListCmd {}

impl Runnable for ListCmd {
    /// List the chains the wallet ships with, one per line in registry order
    fn run(&self) {
        let registry = ChainRegistry::build(Environment::Production).unwrap_or_else(|err| {
            status_err!("invalid embedded chain registry: {}", err);
            std::process::exit(1);
        });

        for chain in &registry {
            println!("{} ({})", chain.chain_id, chain.chain_name);
        }
    }
}
