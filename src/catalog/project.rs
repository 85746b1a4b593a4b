//! Portfolio project records.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Fullstack,
    Backend,
    Frontend,
    Mobile,
    Devops,
    #[serde(other)]
    Other,
}

/// Gallery image of a project page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectImage {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    /// CSS aspect ratio, e.g. "16/9".
    #[serde(default)]
    pub aspect_ratio: Option<String>,
}

/// One portfolio project, routed at `/project/{slug}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub category: ProjectCategory,
    pub year: u16,
    #[serde(default)]
    pub cover_image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
}

impl Project {
    /// Site path of the project page.
    pub fn path(&self) -> String {
        format!("/project/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_project() {
        let toml = r#"
            id = "1"
            slug = "demo"
            title = "Demo"
            category = "backend"
            year = 2024
            tech_stack = ["Rust", "PostgreSQL"]

            [[images]]
            src = "/img/demo.png"
            aspect_ratio = "16/9"
        "#;
        let project: Project = toml::from_str(toml).unwrap();
        assert_eq!(project.category, ProjectCategory::Backend);
        assert_eq!(project.tech_stack, ["Rust", "PostgreSQL"]);
        assert_eq!(project.images[0].aspect_ratio.as_deref(), Some("16/9"));
        assert!(project.github.is_none());
        assert_eq!(project.path(), "/project/demo");
    }

    #[test]
    fn test_unknown_category_is_other() {
        let toml = r#"
            id = "2"
            slug = "cli"
            title = "CLI"
            category = "tooling"
            year = 2023
        "#;
        let project: Project = toml::from_str(toml).unwrap();
        assert_eq!(project.category, ProjectCategory::Other);
    }
}
