//! Project Catalog
//!
//! Read-only access to the portfolio's project records.
//!
//! The records themselves live in [`PROJECTS`]; [`Catalog`] wraps a slice of
//! them and adds lookup and validation. Lookups never panic: a missing id is
//! reported as [`CatalogError::NotFound`] so views can render a not-found
//! state instead of failing.

mod data;
pub mod error;
pub mod types;

pub use data::PROJECTS;
pub use error::{CatalogError, CatalogResult};
pub use types::{Project, ProjectId};

use std::collections::HashSet;

/// Read-only view over a set of projects
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    projects: &'static [Project],
}

impl Catalog {
    /// Wrap an arbitrary static slice of projects
    pub const fn new(projects: &'static [Project]) -> Self {
        Self { projects }
    }

    /// The catalog compiled into this binary
    pub const fn global() -> Self {
        Self::new(PROJECTS)
    }

    /// All projects in listing order
    pub fn all(&self) -> &'static [Project] {
        self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Project ids in listing order
    pub fn ids(&self) -> impl Iterator<Item = ProjectId> + '_ {
        self.projects.iter().map(|p| p.id)
    }

    /// Find a project by id
    pub fn find(&self, id: ProjectId) -> Option<&'static Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Get a project by id, failing with [`CatalogError::NotFound`]
    pub fn get(&self, id: ProjectId) -> CatalogResult<&'static Project> {
        self.find(id).ok_or(CatalogError::NotFound(id))
    }

    /// Look up a project from a raw route prop such as `"0"`
    pub fn lookup(&self, raw: &str) -> CatalogResult<&'static Project> {
        let id = parse_id(raw)?;
        self.get(id)
    }

    /// Distinct technologies across all projects, in first-seen order
    pub fn tech_index(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .flat_map(|p| p.tech.iter().copied())
            .filter(|t| seen.insert(t.to_ascii_lowercase()))
            .collect()
    }

    /// Projects that list the given technology
    pub fn using<'a>(&'a self, tech: &'a str) -> impl Iterator<Item = &'static Project> + 'a {
        self.projects.iter().filter(move |p| p.uses(tech))
    }

    /// Check the catalog invariants and report every violation
    pub fn validate(&self) -> Result<(), Vec<CatalogError>> {
        let mut errors = Vec::new();
        let mut ids = HashSet::new();

        for project in self.projects {
            if !ids.insert(project.id) {
                errors.push(CatalogError::DuplicateId(project.id));
            }

            let required = [
                ("title", project.title.trim().is_empty()),
                ("github", project.github.trim().is_empty()),
                ("tech", project.tech.is_empty()),
            ];
            for (field, empty) in required {
                if empty {
                    errors.push(CatalogError::MissingField {
                        id: project.id,
                        field,
                    });
                }
            }

            let links = [
                ("github", Some(project.github)),
                ("demo", project.demo),
                ("image", project.image),
            ];
            for (field, value) in links {
                if let Some(value) = value.filter(|v| !v.is_empty()) {
                    if !is_http_url(value) {
                        errors.push(CatalogError::InvalidUrl {
                            id: project.id,
                            field,
                            value: value.to_string(),
                        });
                    }
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::global()
    }
}

/// Parse a route prop into a project id
///
/// Only the canonical decimal form is accepted, so each project has exactly
/// one detail path: no sign, no padding, no leading zeros.
pub fn parse_id(raw: &str) -> CatalogResult<ProjectId> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !canonical {
        return Err(CatalogError::InvalidId(raw.to_string()));
    }
    raw.parse::<ProjectId>()
        .map_err(|_| CatalogError::InvalidId(raw.to_string()))
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("https://") || value.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    static BROKEN: &[Project] = &[
        Project {
            id: 4,
            title: "",
            description: "",
            tech: &[],
            github: "github.com/no-scheme",
            demo: None,
            image: None,
        },
        Project {
            id: 4,
            title: "Twin",
            description: "",
            tech: &["Rust"],
            github: "https://github.com/example/twin",
            demo: Some("ftp://example.com"),
            image: None,
        },
    ];

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::global();
        let unique: HashSet<_> = catalog.ids().collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn test_required_fields_present() {
        for project in Catalog::global().all() {
            assert!(!project.github.is_empty(), "project {} has no github", project.id);
            assert!(!project.tech.is_empty(), "project {} has no tech", project.id);
        }
    }

    #[test]
    fn test_global_catalog_validates() {
        assert_eq!(Catalog::global().validate(), Ok(()));
    }

    #[test]
    fn test_get_existing() {
        let project = Catalog::global().get(1).unwrap();
        assert_eq!(project.title, "Mental Health Journal App");
        assert_eq!(project.tech, &["Vue", "TypeScript", "Tailwind", "AI"]);
    }

    #[test]
    fn test_get_missing() {
        let catalog = Catalog::global();
        assert_eq!(catalog.get(999), Err(CatalogError::NotFound(999)));
        assert!(catalog.find(999).is_none());
    }

    #[test]
    fn test_lookup_from_route_prop() {
        let catalog = Catalog::global();
        assert_eq!(catalog.lookup("0").unwrap().title, "Fuel Delivery Platform");
        assert_eq!(catalog.lookup("1").unwrap().id, 1);
        assert_eq!(
            catalog.lookup("abc"),
            Err(CatalogError::InvalidId("abc".to_string()))
        );
        assert_eq!(
            catalog.lookup("-1"),
            Err(CatalogError::InvalidId("-1".to_string()))
        );
        assert_eq!(catalog.lookup("999"), Err(CatalogError::NotFound(999)));
    }

    #[test]
    fn test_lookup_rejects_non_canonical_ids() {
        let catalog = Catalog::global();
        for raw in ["+1", "01", "00", " 1 ", "1 ", "", "99999999999"] {
            assert_eq!(
                catalog.lookup(raw),
                Err(CatalogError::InvalidId(raw.to_string())),
                "raw {:?}",
                raw
            );
        }
        assert_eq!(parse_id("0"), Ok(0));
        assert_eq!(parse_id("10"), Ok(10));
    }

    #[test]
    fn test_tech_index_dedups_in_order() {
        let index = Catalog::global().tech_index();
        assert_eq!(
            index,
            vec!["Vue", "TypeScript", "Node.js", "MongoDB", "Tailwind", "AI"]
        );
    }

    #[test]
    fn test_using() {
        let catalog = Catalog::global();
        let vue: Vec<_> = catalog.using("vue").map(|p| p.id).collect();
        assert_eq!(vue, vec![0, 1]);
        let mongo: Vec<_> = catalog.using("MongoDB").map(|p| p.id).collect();
        assert_eq!(mongo, vec![0]);
    }

    #[test]
    fn test_validate_reports_every_violation() {
        let errors = Catalog::new(BROKEN).validate().unwrap_err();

        assert!(errors.contains(&CatalogError::DuplicateId(4)));
        assert!(errors.contains(&CatalogError::MissingField {
            id: 4,
            field: "title"
        }));
        assert!(errors.contains(&CatalogError::MissingField {
            id: 4,
            field: "tech"
        }));
        assert!(errors.contains(&CatalogError::InvalidUrl {
            id: 4,
            field: "github",
            value: "github.com/no-scheme".to_string(),
        }));
        assert!(errors.contains(&CatalogError::InvalidUrl {
            id: 4,
            field: "demo",
            value: "ftp://example.com".to_string(),
        }));
        assert_eq!(errors.len(), 5);
    }
}
