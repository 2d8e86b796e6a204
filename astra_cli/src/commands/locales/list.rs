use abscissa_core::{Command, Runnable};
use astra_config::locale;
use clap::Parser;

/// `locales list` subcommand
#[derive(Command, Debug, Parser)]
pub struct ListCmd {}

impl Runnable for ListCmd {
    /// List the locale codes the wallet ships translations for
    fn run(&self) {
        for code in locale::SUPPORTED_LOCALES {
            println!("{}", code);
        }
    }
}
