//! AstraCli Subcommands

mod chains;
mod locales;
mod origins;

use self::chains::ChainsCmd;
use self::locales::LocalesCmd;
use self::origins::OriginsCmd;
use crate::config::AstraCliConfig;
use abscissa_core::{config::Override, Command, Configurable, FrameworkError, Runnable};
use clap::Parser;
use std::path::PathBuf;

/// AstraCli Subcommands
/// Subcommands need to be listed in an enum.
#[derive(Command, Debug, Parser, Runnable)]
pub enum AstraCliCmd {
    /// command for inspecting the embedded chain registry
    #[clap(subcommand)]
    Chains(ChainsCmd),

    /// command for inspecting the embedded locale bundles
    #[clap(subcommand)]
    Locales(LocalesCmd),

    /// command for inspecting the privileged origin allow list
    #[clap(subcommand)]
    Origins(OriginsCmd),
}

/// Entry point for the application. It needs to be a struct to allow using subcommands!
#[derive(Command, Debug, Parser)]
#[clap(author, about, version)]
pub struct EntryPoint {
    #[clap(subcommand)]
    cmd: AstraCliCmd,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Use the specified config file
    #[clap(short, long)]
    pub config: Option<String>,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        self.cmd.run()
    }
}

/// This trait allows you to define how application configuration is loaded.
impl Configurable<AstraCliConfig> for EntryPoint {
    /// Location of the configuration file
    fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config {
            return Some(PathBuf::from(path));
        }

        // Generate ~/.astra/config.toml if it doesn't exist. Since abscissa
        // does not support hot-reload config yet, the file has to be in place
        // before abscissa loads it, and this is the only method that runs
        // early enough.
        crate::config::init().ok()
    }

    /// Apply changes to the config after it's been loaded, e.g. overriding
    /// values in a config file using command-line options.
    fn process_config(&self, config: AstraCliConfig) -> Result<AstraCliConfig, FrameworkError> {
        match &self.cmd {
            AstraCliCmd::Chains(cmd) => cmd.override_config(config),
            _ => Ok(config),
        }
    }
}
