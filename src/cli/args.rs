//! Command-line interface definitions.

use crate::config::{CONFIG_FILE, ConfigSource, util};
use anyhow::{Context, Result};
use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Validated site metadata for static site builds
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Use the record compiled into the binary instead of a config file
    #[arg(long, global = true)]
    pub embedded: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the site config and report every problem
    #[command(visible_alias = "c")]
    Check,

    /// Print the validated site config
    #[command(visible_alias = "s")]
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ShowFormat::Toml)]
        format: ShowFormat,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Write the default site config into a directory
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,
    },
}

/// Output format of `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowFormat {
    Toml,
    Json,
}

impl Cli {
    /// Resolve where the site record is read from.
    ///
    /// `--embedded` wins over `--config`. A relative config path is searched
    /// upward from the current directory; if nothing is found the cwd path
    /// is returned so the error names it.
    pub fn config_source(&self) -> Result<ConfigSource> {
        if self.embedded {
            return Ok(ConfigSource::Embedded);
        }

        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config = util::expand_tilde(&self.config);
        let path = util::find_config_file(&cwd, &config).unwrap_or_else(|| cwd.join(&config));
        Ok(ConfigSource::File(path))
    }
}
