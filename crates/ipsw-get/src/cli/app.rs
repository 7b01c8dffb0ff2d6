use std::path::PathBuf;

use clap::{ArgAction, Parser};
use ipsw_catalog::FilterCriteria;
use ipsw_version::Version;

#[derive(Clone, Debug, Parser)]
#[command(
    name = "ipsw-get",
    version = env!("CARGO_PKG_VERSION"),
    about = "A tool to automate the bulk download of IPSWs using ipsw.me",
    long_about = None
)]
pub struct App {
    /// Minimum iOS version
    #[arg(long = "min-version", visible_alias = "min", value_name = "VERSION")]
    pub min_version: Option<Version>,

    /// Maximum iOS version
    #[arg(long = "max-version", visible_alias = "max", value_name = "VERSION")]
    pub max_version: Option<Version>,

    /// Full or partial device identifier to filter on (eg. iPhone7,2 / iPhone / iPod)
    #[arg(long = "device-identifier", visible_alias = "device", value_name = "IDENTIFIER")]
    pub device_identifier: Option<String>,

    /// Output directory to download files to
    #[arg(short, long, value_name = "DIR")]
    pub output: PathBuf,

    /// TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the firmware metadata endpoint
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// List matched firmwares without downloading them
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl App {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.device_identifier.clone(),
            self.min_version.clone(),
            self.max_version.clone(),
        )
    }
}
