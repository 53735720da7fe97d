use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod defaults;
mod env_file;
mod inject;
mod util;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Command::WebClientId { env, index } => commands::web_client_id::run(&env, &index),

        Command::MapsKeys {
            env,
            manifest,
            plist,
        } => commands::maps_keys::run(&env, &manifest, &plist),

        Command::WebMaps { env, index } => commands::web_maps::run(&env, &index),
    }
}
