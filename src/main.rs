//! Folio - RSS feed and sitemap generator for a static portfolio site.

#![allow(dead_code)]

mod catalog;
mod cli;
mod config;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{
    Cli, Commands,
    check::{check_site, load_catalog},
};
use config::SiteConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SiteConfig::load(cli)?;
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Rss { .. } => generator::build_rss(&config, &load_catalog(&config)?),
        Commands::Sitemap { .. } => generator::build_sitemap(&config, &load_catalog(&config)?),
        Commands::Build { .. } => generator::build_all(&config, &load_catalog(&config)?),
        Commands::Check => check_site(&config).map(|_| ()),
    }
}
