//! Route Patterns
//!
//! A pattern is a `/`-separated list of literal segments and `:name`
//! parameters, e.g. `/projects/:id`. Each pattern compiles to an anchored
//! regex where every parameter becomes a named capture group matching one
//! non-empty path segment. Literals match without regard to ASCII or
//! Unicode case; captured values keep the case they had in the path.

use regex::{Regex, RegexBuilder};
use serde::{Serialize, Serializer};
use std::fmt;

use super::error::{RouteError, RouteResult};

/// One segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Param(String),
}

/// A compiled route pattern
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    segments: Vec<Segment>,
    regex: Regex,
}

impl RoutePattern {
    /// Parse and compile a pattern
    pub fn parse(pattern: &str) -> RouteResult<Self> {
        if !pattern.starts_with('/') {
            return Err(RouteError::invalid(pattern, "must start with '/'"));
        }

        let mut segments = Vec::new();
        let mut expr = String::from("^");

        for part in pattern[1..].split('/').filter(|s| !s.is_empty()) {
            match part.strip_prefix(':') {
                Some(name) => {
                    if !is_valid_param_name(name) {
                        return Err(RouteError::invalid(
                            pattern,
                            format!("invalid parameter name {:?}", name),
                        ));
                    }
                    if segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(p) if p == name))
                    {
                        return Err(RouteError::invalid(
                            pattern,
                            format!("duplicate parameter {:?}", name),
                        ));
                    }
                    expr.push_str(&format!("/(?P<{}>[^/]+)", name));
                    segments.push(Segment::Param(name.to_string()));
                }
                None => {
                    expr.push('/');
                    expr.push_str(&regex::escape(part));
                    segments.push(Segment::Literal(part.to_string()));
                }
            }
        }

        if segments.is_empty() {
            expr.push('/');
        }
        expr.push('$');

        let regex = RegexBuilder::new(&expr)
            .case_insensitive(true)
            .build()
            .map_err(|e| RouteError::invalid(pattern, e.to_string()))?;

        Ok(Self {
            source: canonical(&segments),
            segments,
            regex,
        })
    }

    /// The pattern in canonical form (no trailing or doubled slashes)
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters this pattern captures, in order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// True when the pattern has no parameters
    pub fn is_static(&self) -> bool {
        self.param_names().next().is_none()
    }

    /// Match a normalized path, returning the percent-decoded parameters
    pub fn matches(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let mut params = Params::default();
        for name in self.param_names() {
            if let Some(raw) = caps.name(name) {
                let value = urlencoding::decode(raw.as_str())
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| raw.as_str().to_string());
                params.insert(name, value);
            }
        }
        Some(params)
    }

    /// Build a concrete path by substituting parameters
    pub fn href(&self, params: &Params) -> RouteResult<String> {
        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(name) => {
                    let value = params
                        .get(name)
                        .ok_or_else(|| RouteError::MissingParam(name.clone()))?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }
        Ok(path)
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for RoutePattern {}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Serialize for RoutePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Parameters captured from a path, in pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

fn is_valid_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn canonical(segments: &[Segment]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    segments
        .iter()
        .map(|s| match s {
            Segment::Literal(text) => format!("/{}", text),
            Segment::Param(name) => format!("/:{}", name),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert_eq!(pattern.as_str(), "/");
        assert!(pattern.is_static());
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/about").is_none());
    }

    #[test]
    fn test_parse_static() {
        let pattern = RoutePattern::parse("/about").unwrap();
        assert_eq!(pattern.segments(), &[Segment::Literal("about".to_string())]);
        assert!(pattern.matches("/about").unwrap().is_empty());
        assert!(pattern.matches("/about/me").is_none());
        assert!(pattern.matches("/abou").is_none());
    }

    #[test]
    fn test_parse_param() {
        let pattern = RoutePattern::parse("/projects/:id").unwrap();
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);

        let params = pattern.matches("/projects/0").unwrap();
        assert_eq!(params.get("id"), Some("0"));

        assert!(pattern.matches("/projects").is_none());
        assert!(pattern.matches("/projects/").is_none());
        assert!(pattern.matches("/projects/0/extra").is_none());
    }

    #[test]
    fn test_literals_ignore_case() {
        let pattern = RoutePattern::parse("/projects/:id").unwrap();
        let params = pattern.matches("/PROJECTS/Abc").unwrap();
        assert_eq!(params.get("id"), Some("Abc"));
        assert!(RoutePattern::parse("/about").unwrap().matches("/About").is_some());
    }

    #[test]
    fn test_param_is_percent_decoded() {
        let pattern = RoutePattern::parse("/projects/:id").unwrap();
        let params = pattern.matches("/projects/%31").unwrap();
        assert_eq!(params.get("id"), Some("1"));
    }

    #[test]
    fn test_literal_is_escaped() {
        let pattern = RoutePattern::parse("/a.b").unwrap();
        assert!(pattern.matches("/a.b").is_some());
        assert!(pattern.matches("/axb").is_none());
    }

    #[test]
    fn test_canonical_form() {
        let pattern = RoutePattern::parse("/projects//:id/").unwrap();
        assert_eq!(pattern.as_str(), "/projects/:id");
        assert_eq!(pattern, RoutePattern::parse("/projects/:id").unwrap());
    }

    #[test]
    fn test_invalid_patterns() {
        assert!(matches!(
            RoutePattern::parse("about"),
            Err(RouteError::InvalidPattern { .. })
        ));
        assert!(RoutePattern::parse("/projects/:").is_err());
        assert!(RoutePattern::parse("/projects/:1d").is_err());
        assert!(RoutePattern::parse("/projects/:id-x").is_err());
        assert!(RoutePattern::parse("/a/:id/b/:id").is_err());
    }

    #[test]
    fn test_href() {
        let pattern = RoutePattern::parse("/projects/:id").unwrap();
        let params = Params::new().with("id", "1");
        assert_eq!(pattern.href(&params).unwrap(), "/projects/1");

        let params = Params::new().with("id", "a b");
        assert_eq!(pattern.href(&params).unwrap(), "/projects/a%20b");

        assert_eq!(
            pattern.href(&Params::new()),
            Err(RouteError::MissingParam("id".to_string()))
        );

        let root = RoutePattern::parse("/").unwrap();
        assert_eq!(root.href(&Params::new()).unwrap(), "/");
    }

    #[test]
    fn test_params_insert_replaces() {
        let mut params = Params::new().with("id", "0");
        params.insert("id", "1");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("1"));
    }

    #[test]
    fn test_params_serialize_as_map() {
        let params = Params::new().with("id", "0");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({ "id": "0" })
        );
    }
}
