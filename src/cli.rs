use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::defaults::Defaults;

/// Pre-build secret injection: .env values into platform config files
#[derive(Parser, Debug)]
#[command(version, about = "Pre-build secret injection utility")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replace the Google web client ID placeholder in web/index.html
    WebClientId {
        /// Path to the key=value configuration file
        #[arg(long, default_value = Defaults::ENV_FILE)]
        env: PathBuf,

        /// Path to the web index.html
        #[arg(long, default_value = Defaults::WEB_INDEX_PATH)]
        index: PathBuf,
    },

    /// Set the Google Maps API key in the Android manifest and the iOS plist
    MapsKeys {
        /// Path to the key=value configuration file
        #[arg(long, default_value = Defaults::ENV_FILE)]
        env: PathBuf,

        /// Path to AndroidManifest.xml
        #[arg(long, default_value = Defaults::ANDROID_MANIFEST_PATH)]
        manifest: PathBuf,

        /// Path to the iOS Info.plist
        #[arg(long, default_value = Defaults::IOS_PLIST_PATH)]
        plist: PathBuf,
    },

    /// Add or refresh the Google Maps script tag in web/index.html
    WebMaps {
        /// Path to the key=value configuration file
        #[arg(long, default_value = Defaults::ENV_FILE)]
        env: PathBuf,

        /// Path to the web index.html
        #[arg(long, default_value = Defaults::WEB_INDEX_PATH)]
        index: PathBuf,
    },
}
