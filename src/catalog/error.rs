//! Catalog error types

use thiserror::Error;

/// Errors raised by catalog lookups and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No project carries the requested id
    #[error("Project not found: {0}")]
    NotFound(u32),

    /// A route prop could not be read as a project id
    #[error("Invalid project id: {0:?}")]
    InvalidId(String),

    /// Two records share an id
    #[error("Duplicate project id: {0}")]
    DuplicateId(u32),

    /// A required field is empty
    #[error("Project {id} has an empty {field}")]
    MissingField { id: u32, field: &'static str },

    /// A link field is not an http(s) URL
    #[error("Project {id} has an invalid {field} URL: {value}")]
    InvalidUrl {
        id: u32,
        field: &'static str,
        value: String,
    },
}

impl CatalogError {
    /// True for the "lookup miss" family, which views render as a not-found state
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_) | CatalogError::InvalidId(_))
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::NotFound(999);
        assert_eq!(err.to_string(), "Project not found: 999");

        let err = CatalogError::MissingField {
            id: 3,
            field: "github",
        };
        assert_eq!(err.to_string(), "Project 3 has an empty github");
    }

    #[test]
    fn test_is_not_found() {
        assert!(CatalogError::NotFound(1).is_not_found());
        assert!(CatalogError::InvalidId("abc".to_string()).is_not_found());
        assert!(!CatalogError::DuplicateId(1).is_not_found());
    }
}
