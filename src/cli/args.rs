//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folio feed and sitemap generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml, searched upward from cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "folio.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

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
    /// Generate the RSS feed
    #[command(visible_alias = "r")]
    Rss {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Generate sitemap.xml
    #[command(visible_alias = "s")]
    Sitemap {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Generate both the RSS feed and the sitemap
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Validate config and catalog without writing anything
    #[command(visible_alias = "c")]
    Check,
}

/// Shared overrides for the generating commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Override site URL (e.g. for staging deployments)
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Minify the generated XML
    #[arg(
        short,
        long,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        require_equals = false
    )]
    pub minify: Option<bool>,
}

impl Cli {
    /// Build overrides of the current command, if it generates output.
    pub fn build_args(&self) -> Option<&BuildArgs> {
        match &self.command {
            Commands::Rss { build_args }
            | Commands::Sitemap { build_args }
            | Commands::Build { build_args } => Some(build_args),
            Commands::Check => None,
        }
    }
}
