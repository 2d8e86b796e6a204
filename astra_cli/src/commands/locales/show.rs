use crate::prelude::*;
use abscissa_core::{Command, Runnable};
use astra_config::locale;
use clap::Parser;
use std::collections::BTreeMap;

/// `locales show` subcommand
#[derive(Command, Debug, Parser)]
pub struct ShowCmd {
    /// Locale code to show; the configured locale when omitted
    pub locale: Option<String>,
}

impl Runnable for ShowCmd {
    /// Dump one assembled message bundle as JSON
    fn run(&self) {
        let config = APP.config();
        let code = self.locale.clone().unwrap_or_else(|| config.locale.clone());

        let bundle = locale::bundle(&code).unwrap_or_else(|err| {
            status_err!("{}", err);
            std::process::exit(1);
        });

        // sort keys for a stable dump
        let messages: BTreeMap<&str, &str> = bundle
            .messages()
            .iter()
            .map(|(key, template)| (key.as_str(), template.as_str()))
            .collect();

        println!("{}", serde_json::to_string_pretty(&messages).unwrap());
    }
}
