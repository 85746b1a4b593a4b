//! Static content catalog.
//!
//! The catalog is hand-authored TOML in the content directory:
//!
//! | File                  | Key                  | Required |
//! |-----------------------|----------------------|----------|
//! | `articles.toml`       | `[[articles]]`       | yes      |
//! | `projects.toml`       | `[[projects]]`       | yes      |
//! | `certifications.toml` | `[[certifications]]` | no       |
//! | `testimonials.toml`   | `[[testimonials]]`   | no       |
//!
//! It is loaded once per run, validated as a whole, and never mutated.

mod article;
mod profile;
mod project;

pub use article::Article;
pub use profile::{Certification, Testimonial};
pub use project::{Project, ProjectCategory};

use crate::{
    config::{ConfigDiagnostics, FieldPath},
    debug, log,
    utils::plural_count,
};
use regex::Regex;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};
use thiserror::Error;

/// Catalog loading and validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("catalog file `{0}` is missing")]
    Missing(PathBuf),

    #[error("article `{slug}` has invalid published_at `{value}` (expected YYYY-MM-DD)")]
    InvalidDate { slug: String, value: String },

    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// All content records of the site.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub articles: Vec<Article>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Default, Deserialize)]
struct ArticlesFile {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Default, Deserialize)]
struct ProjectsFile {
    #[serde(default)]
    projects: Vec<Project>,
}

#[derive(Debug, Default, Deserialize)]
struct CertificationsFile {
    #[serde(default)]
    certifications: Vec<Certification>,
}

#[derive(Debug, Default, Deserialize)]
struct TestimonialsFile {
    #[serde(default)]
    testimonials: Vec<Testimonial>,
}

/// URL path segment made of unreserved characters only.
static RE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._~-]*$").unwrap());

impl Catalog {
    /// Load and validate the catalog from a content directory.
    pub fn load(dir: &Path) -> Result<Self, CatalogError> {
        let articles: ArticlesFile = read_file(&dir.join("articles.toml"), true)?;
        let projects: ProjectsFile = read_file(&dir.join("projects.toml"), true)?;
        let certifications: CertificationsFile =
            read_file(&dir.join("certifications.toml"), false)?;
        let testimonials: TestimonialsFile = read_file(&dir.join("testimonials.toml"), false)?;

        let catalog = Self {
            articles: articles.articles,
            projects: projects.projects,
            certifications: certifications.certifications,
            testimonials: testimonials.testimonials,
        };

        catalog.validate()?;
        debug!("catalog"; "loaded {}", catalog.summary());
        Ok(catalog)
    }

    /// Human-readable record counts.
    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {}, {}",
            plural_count(self.articles.len(), "article"),
            plural_count(self.projects.len(), "project"),
            plural_count(self.certifications.len(), "certification"),
            plural_count(self.testimonials.len(), "testimonial"),
        )
    }

    /// Validate identity keys and dates across the whole catalog.
    ///
    /// Collects every problem before failing.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut diag = ConfigDiagnostics::new("catalog");

        self.validate_articles(&mut diag);
        self.validate_projects(&mut diag);

        let mut cert_ids = HashSet::new();
        for (i, cert) in self.certifications.iter().enumerate() {
            if !cert_ids.insert(cert.id.as_str()) {
                diag.error(
                    FieldPath::index("certifications", i, "id"),
                    format!("duplicate id `{}`", cert.id),
                );
            }
            if let Some(link) = &cert.credential_url {
                check_url(
                    &mut diag,
                    FieldPath::record("certifications", &cert.id, "credential_url"),
                    link,
                );
            }
        }

        diag.print_warnings();
        diag.into_result().map_err(CatalogError::Diagnostics)
    }

    fn validate_articles(&self, diag: &mut ConfigDiagnostics) {
        let mut slugs = HashSet::new();

        for (i, article) in self.articles.iter().enumerate() {
            if !check_slug(diag, "articles", i, &article.slug, &mut slugs) {
                continue;
            }
            let slug = article.slug.as_str();

            if article.title.trim().is_empty() {
                diag.error(FieldPath::record("articles", slug, "title"), "title is empty");
            }
            if article.published().is_err() {
                diag.error_with_hint(
                    FieldPath::record("articles", slug, "published_at"),
                    format!("`{}` is not a valid date", article.published_at),
                    "use YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ",
                );
            }
            if article.excerpt.trim().is_empty() {
                diag.warn(
                    FieldPath::record("articles", slug, "excerpt"),
                    "empty excerpt, feed readers will show no summary",
                );
            }
        }
    }

    fn validate_projects(&self, diag: &mut ConfigDiagnostics) {
        let mut slugs = HashSet::new();
        let mut ids = HashSet::new();

        for (i, project) in self.projects.iter().enumerate() {
            if !ids.insert(project.id.as_str()) {
                diag.error(
                    FieldPath::index("projects", i, "id"),
                    format!("duplicate id `{}`", project.id),
                );
            }
            if !check_slug(diag, "projects", i, &project.slug, &mut slugs) {
                continue;
            }
            let slug = project.slug.as_str();

            if project.title.trim().is_empty() {
                diag.error(FieldPath::record("projects", slug, "title"), "title is empty");
            }
            for (field, link) in [("github", &project.github), ("live_demo", &project.live_demo)] {
                if let Some(link) = link {
                    check_url(diag, FieldPath::record("projects", slug, field), link);
                }
            }
        }
    }
}

/// Check slug shape and uniqueness. Returns false if the record is unusable.
fn check_slug<'a>(
    diag: &mut ConfigDiagnostics,
    collection: &str,
    index: usize,
    slug: &'a str,
    seen: &mut HashSet<&'a str>,
) -> bool {
    if !RE_SLUG.is_match(slug) {
        diag.error_with_hint(
            FieldPath::index(collection, index, "slug"),
            format!("`{slug}` is not URL-safe"),
            "use letters, digits, `-`, `_`, `.` or `~`",
        );
        return false;
    }
    if !seen.insert(slug) {
        diag.error(
            FieldPath::index(collection, index, "slug"),
            format!("duplicate slug `{slug}`"),
        );
        return false;
    }
    true
}

fn check_url(diag: &mut ConfigDiagnostics, field: FieldPath, link: &str) {
    if let Err(e) = url::Url::parse(link) {
        diag.error(field, format!("invalid URL `{link}`: {e}"));
    }
}

/// Read one catalog file. Optional files that do not exist read as empty.
fn read_file<T: DeserializeOwned + Default>(
    path: &Path,
    required: bool,
) -> Result<T, CatalogError> {
    if !path.exists() {
        if required {
            return Err(CatalogError::Missing(path.to_path_buf()));
        }
        debug!("catalog"; "{} not found, skipping", path.display());
        return Ok(T::default());
    }

    let content =
        fs::read_to_string(path).map_err(|err| CatalogError::Io(path.to_path_buf(), err))?;

    let mut ignored = Vec::new();
    let deserializer = toml::Deserializer::new(&content);
    let parsed = serde_ignored::deserialize(deserializer, |field: serde_ignored::Path| {
        ignored.push(field.to_string());
    })
    .map_err(|err| CatalogError::Toml(path.to_path_buf(), err))?;

    for field in ignored {
        log!("warning"; "{}: unknown field `{}` ignored", path.display(), field);
    }

    Ok(parsed)
}
