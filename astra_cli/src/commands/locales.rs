//! `locales` subcommand

mod list;
mod show;

use abscissa_core::{Command, Runnable};
use clap::Parser;

use self::list::ListCmd;
use self::show::ShowCmd;

/// `locales` subcommand
#[derive(Command, Debug, Parser, Runnable)]
pub enum LocalesCmd {
    List(ListCmd),
    Show(ShowCmd),
}
