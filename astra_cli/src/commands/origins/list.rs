use abscissa_core::{Command, Runnable};
use astra_config::config::privileged_origins;
use clap::Parser;

/// `origins list` subcommand
#[derive(Command, Debug, Parser)]
pub struct ListCmd {}

impl Runnable for ListCmd {
    /// List privileged origins in declared order
    fn run(&self) {
        for origin in privileged_origins() {
            println!("{}", origin);
        }
    }
}
