//! Certifications and testimonials shown on the about pages.
//!
//! Neither document links to these records; they are loaded and validated
//! with the rest of the catalog.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub issuer: String,
    /// Display date as issued, e.g. "2023-05".
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub company: String,
    pub quote: String,
}
