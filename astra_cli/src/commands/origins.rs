//! `origins` subcommand

mod list;

use abscissa_core::{Command, Runnable};
use clap::Parser;

use self::list::ListCmd;

/// `origins` subcommand
#[derive(Command, Debug, Parser, Runnable)]
pub enum OriginsCmd {
    List(ListCmd),
}
