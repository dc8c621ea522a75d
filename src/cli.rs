use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Optionally specify the path to the config file to use.
    /// If not set, then the `ROSTER_CONFIG_FILE` environment variable will be used, and failing that the defaults.
    #[arg(short, long, value_name = "FILE", env = "ROSTER_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Delete without asking for confirmation.
    #[arg(short = 'y', long)]
    pub assume_yes: bool,

    /// Read commands from a file instead of the terminal.
    #[arg(short, long, value_name = "FILE")]
    pub script: Option<PathBuf>,
}
