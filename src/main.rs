//! sitemeta - validate and print the site config of a static site.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitemeta::{
    cli::{self, Cli, Commands},
    config::{SiteConfig, init_config},
    logger,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Commands::Init { dir } = &cli.command {
        let cwd = std::env::current_dir()?;
        let dir = dir.as_ref().map_or_else(|| cwd.clone(), |d| cwd.join(d));
        cli::init::new_site(&dir)?;
        return Ok(());
    }

    // An invalid record aborts here, before anything reads it
    let source = cli.config_source()?;
    let config = init_config(SiteConfig::load(&source)?)?;

    match &cli.command {
        Commands::Check => {
            cli::check::report(&source, config);
            Ok(())
        }
        Commands::Show { format, pretty } => cli::show::print_config(config, *format, *pretty),
        Commands::Init { .. } => Ok(()),
    }
}
