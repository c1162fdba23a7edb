//! Application Shell
//!
//! The single HTML document served for every page route. The front-end
//! boots from it and renders the view for the current location, so deep
//! links like `/projects/1` work on a fresh load.

use std::fmt;
use std::path::{Path, PathBuf};

/// Fallback document used when no front-end build is available
const EMBEDDED_SHELL: &str = include_str!("shell.html");

/// Where the shell document came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellSource {
    /// `index.html` of a front-end build
    StaticDir(PathBuf),
    /// Built into the binary
    Embedded,
}

impl fmt::Display for ShellSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellSource::StaticDir(path) => write!(f, "{}", path.display()),
            ShellSource::Embedded => f.write_str("embedded"),
        }
    }
}

/// HTML document served for page routes
#[derive(Debug, Clone)]
pub struct AppShell {
    pub html: String,
    pub source: ShellSource,
}

impl AppShell {
    /// Load `index.html` from a front-end build, falling back to the
    /// embedded document
    pub fn load(static_dir: &Path) -> Self {
        let index = static_dir.join("index.html");
        match std::fs::read_to_string(&index) {
            Ok(html) => {
                tracing::info!("Serving application shell from {:?}", index);
                Self {
                    html,
                    source: ShellSource::StaticDir(index),
                }
            }
            Err(e) => {
                tracing::warn!(
                    "No front-end build at {:?} ({}), serving embedded shell",
                    index,
                    e
                );
                Self::embedded()
            }
        }
    }

    pub fn embedded() -> Self {
        Self {
            html: EMBEDDED_SHELL.to_string(),
            source: ShellSource::Embedded,
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.source == ShellSource::Embedded
    }
}
