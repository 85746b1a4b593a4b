//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `build` | `[build]`    | Paths, minify, feed and sitemap settings |
//! | `site`  | `[site]`     | Site constants (url, title, author)      |

pub mod build;
pub mod site;

pub use build::{BuildSectionConfig, ChangeFreq};
pub use site::SiteInfoConfig;
