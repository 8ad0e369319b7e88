//! Command-line interface

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::data::Country;

#[derive(Parser, Debug)]
#[command(
    name = "enroll",
    version,
    about = "Step-by-step registration wizard for the terminal"
)]
pub struct Cli {
    /// Directory for config and logs (default: ~/.enroll)
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Config file to read instead of <data-dir>/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Country preselected in the address section
    #[arg(long, value_name = "NAME")]
    pub country: Option<Country>,

    /// Hide the skip affordance
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Flags take precedence over the config file
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(country) = self.country {
            config = config.with_default_country(country);
        }
        if self.no_skip {
            config = config.with_show_skip(false);
        }
        config
    }
}
