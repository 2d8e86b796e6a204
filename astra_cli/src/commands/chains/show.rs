use crate::prelude::*;
use abscissa_core::{Command, Runnable};
use astra_config::{chain::ChainRegistry, Environment};
use clap::Parser;
use serde::Serialize;

/// `chains show` subcommand
#[derive(Command, Debug, Parser)]
pub struct ShowCmd {
    /// Chain id to show; the configured default chain when omitted
    pub chain_id: Option<String>,
}

impl Runnable for ShowCmd {
    /// Dump one chain descriptor as JSON
    fn run(&self) {
        let config = APP.config();
        let chain_id = self
            .chain_id
            .clone()
            .unwrap_or_else(|| config.default_chain.clone());

        let registry = ChainRegistry::build(Environment::Production).unwrap_or_else(|err| {
            status_err!("invalid embedded chain registry: {}", err);
            std::process::exit(1);
        });

        if let Some(chain_details) = registry.get(&chain_id) {
            // customize indentation for the descriptor dump
            let buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut serializer = serde_json::Serializer::with_formatter(buf, formatter);
            chain_details.serialize(&mut serializer).unwrap();

            println!("{}", String::from_utf8(serializer.into_inner()).unwrap());
        } else {
            status_err!("chain '{}' is not in the registry", chain_id);
            std::process::exit(1);
        }
    }
}
