//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build/     # [build], [build.feed], [build.sitemap]
//! │   └── site       # [site]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # Config file discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The loaded `SiteConfig` is the single source of the site constants
//! (base URL, title, author) and is passed explicitly to both generators.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildSectionConfig, ChangeFreq, SiteInfoConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::{BuildArgs, Cli};
use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site constants
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; the project root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path =
            find_config_file(&cli.config).ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;

        if let Some(args) = cli.build_args() {
            config.apply_build_args(args);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)
            .map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        crate::log!("warning"; "unknown fields in {} are ignored:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Catalog directory.
    pub fn content_dir(&self) -> PathBuf {
        self.root_join(&self.build.content)
    }

    /// Output directory for generated documents.
    pub fn output_dir(&self) -> PathBuf {
        self.root_join(&self.build.output)
    }

    /// Absolute output path of the RSS feed.
    pub fn feed_output(&self) -> PathBuf {
        self.output_dir().join(&self.build.feed.path)
    }

    /// Absolute output path of the sitemap.
    pub fn sitemap_output(&self) -> PathBuf {
        self.output_dir().join(&self.build.sitemap.path)
    }

    /// Public URL of the feed, used for the channel's self link.
    pub fn feed_url(&self) -> String {
        let path = self.build.feed.path.to_string_lossy().replace('\\', "/");
        self.site.url_for(&path)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.site.url, args.site_url.as_ref());
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new("config");

        self.site.validate(&mut diag);
        self.build.validate(&mut diag);

        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site]\ntitle = \"Test\"\ndescription = \"Test\"\nauthor = \"Test Author\"\n\
         email = \"test@example.com\"\nurl = \"https://example.com\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        assert!(SiteConfig::parse_with_ignored("[site\ntitle = \"My Blog\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.title, "");
        assert_eq!(config.site.language, "en-us");
        assert!(!config.build.minify);
        assert_eq!(config.build.sitemap.pages.len(), 6);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.title, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site]\ntitle = \"Test\"\ndescription = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_output_paths() {
        let mut config = test_parse_config("[build]\noutput = \"dist\"");
        config.root = PathBuf::from("/site");

        assert_eq!(config.content_dir(), PathBuf::from("/site/content"));
        assert_eq!(config.feed_output(), PathBuf::from("/site/dist/rss.xml"));
        assert_eq!(config.sitemap_output(), PathBuf::from("/site/dist/sitemap.xml"));
        assert_eq!(config.feed_url(), "https://example.com/rss.xml");
    }

    #[test]
    fn test_apply_build_args() {
        let mut config = test_parse_config("");
        config.apply_build_args(&BuildArgs {
            output: Some(PathBuf::from("/tmp/out")),
            site_url: Some("https://staging.example.com".into()),
            minify: Some(true),
        });

        assert_eq!(config.build.output, PathBuf::from("/tmp/out"));
        assert_eq!(config.site.url, "https://staging.example.com");
        assert!(config.build.minify);
    }

    #[test]
    fn test_apply_empty_build_args_keeps_config() {
        let mut config = test_parse_config("[build]\nminify = true");
        config.apply_build_args(&BuildArgs::default());

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.site.url, "https://example.com");
        assert!(config.build.minify);
    }

    #[test]
    fn test_validate_fixture_config() {
        assert!(test_parse_config("").validate().is_ok());
    }

    #[test]
    fn test_validate_reports_diagnostics() {
        let mut config = test_parse_config("");
        config.site.url = "not a url".into();
        let err = config.validate().unwrap_err();
        let config_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(config_err, ConfigError::Diagnostics(d) if d.len() == 1));
    }
}
