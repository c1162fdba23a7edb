//! Catalog record types

use serde::Serialize;

/// Stable project identifier, also the `:id` route parameter
pub type ProjectId = u32;

/// A portfolio project entry
///
/// All fields borrow `'static` data so the whole catalog can live in a
/// `static` and be shared without allocation or locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Unique identifier
    pub id: ProjectId,
    /// Display title
    pub title: &'static str,
    /// One-paragraph summary
    pub description: &'static str,
    /// Technologies, in display order
    pub tech: &'static [&'static str],
    /// Source repository URL
    pub github: &'static str,
    /// Live demo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<&'static str>,
    /// Screenshot or cover image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

impl Project {
    /// Path of the detail page for this project
    pub fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }

    /// Check whether the project lists a technology (case-insensitive)
    pub fn uses(&self, tech: &str) -> bool {
        self.tech.iter().any(|t| t.eq_ignore_ascii_case(tech))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: Project = Project {
        id: 7,
        title: "Sample",
        description: "A sample project",
        tech: &["Rust", "Leptos"],
        github: "https://github.com/example/sample",
        demo: None,
        image: None,
    };

    #[test]
    fn test_detail_path() {
        assert_eq!(SAMPLE.detail_path(), "/projects/7");
    }

    #[test]
    fn test_uses() {
        assert!(SAMPLE.uses("rust"));
        assert!(SAMPLE.uses("Leptos"));
        assert!(!SAMPLE.uses("Vue"));
    }

    #[test]
    fn test_serialization_skips_missing_links() {
        let json = serde_json::to_value(SAMPLE).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["tech"][1], "Leptos");
        assert!(json.get("demo").is_none());
        assert!(json.get("image").is_none());
    }
}
