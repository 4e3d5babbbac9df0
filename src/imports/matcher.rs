use regex::Regex;

use crate::error::Result;

/// Which group an import belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageKind {
    /// No domain in the first path segment (`fmt`, `net/http`)
    Standard,
    /// Under the project's root package
    Local,
    /// Anything else with a domain (`github.com/...`, `gopkg.in/...`)
    External,
}

/// Classifies import paths relative to one project package
#[derive(Debug, Clone)]
pub struct Matcher {
    external: Regex,
    local: Regex,
}

impl Matcher {
    pub fn new(local_package: &str) -> Result<Self> {
        let root = local_package
            .trim()
            .trim_matches('"')
            .trim_end_matches('/');

        Ok(Self {
            external: Regex::new(r"^[^/\s]+\.[^/\s]*/")?,
            local: Regex::new(&format!("^{}(/|$)", regex::escape(root)))?,
        })
    }

    /// Classify an unquoted import path
    pub fn classify(&self, path: &str) -> PackageKind {
        if self.local.is_match(path) {
            PackageKind::Local
        } else if self.external.is_match(path) {
            PackageKind::External
        } else {
            PackageKind::Standard
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> Matcher {
        Matcher::new("github.com/Vivino/go-api").unwrap()
    }

    #[test]
    fn test_standard_library() {
        let m = matcher();
        assert_eq!(m.classify("os"), PackageKind::Standard);
        assert_eq!(m.classify("net/http"), PackageKind::Standard);
        assert_eq!(m.classify("encoding/json"), PackageKind::Standard);
    }

    #[test]
    fn test_external() {
        let m = matcher();
        assert_eq!(m.classify("github.com/Pungyeon/required"), PackageKind::External);
        assert_eq!(m.classify("gopkg.in/yaml.v2"), PackageKind::External);
        assert_eq!(
            m.classify("github.com/Vivino/go-tools/something"),
            PackageKind::External
        );
    }

    #[test]
    fn test_local_respects_segment_boundary() {
        let m = matcher();
        assert_eq!(m.classify("github.com/Vivino/go-api"), PackageKind::Local);
        assert_eq!(
            m.classify("github.com/Vivino/go-api/services/kafka"),
            PackageKind::Local
        );
        assert_eq!(
            m.classify("github.com/Vivino/go-api-client"),
            PackageKind::External
        );
    }

    #[test]
    fn test_dots_in_package_are_literal() {
        let m = Matcher::new("github.com/acme/x").unwrap();
        assert_eq!(m.classify("githubXcom/acme/x"), PackageKind::Standard);
    }

    #[test]
    fn test_module_without_domain() {
        let m = Matcher::new("myapp").unwrap();
        assert_eq!(m.classify("myapp/internal/store"), PackageKind::Local);
        assert_eq!(m.classify("myapplication"), PackageKind::Standard);
    }
}
