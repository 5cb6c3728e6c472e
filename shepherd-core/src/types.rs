//! Domain types for shepherd.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Slugs are validated at construction so every downstream consumer
//! can rely on the `owner/name` shape.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed logical name for a managed repository (the manifest key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(pub String);

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A validated `owner/name` repository slug.
///
/// Parsing rejects anything that is not exactly two non-empty segments
/// separated by one `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let mut segments = value.splitn(2, '/');
        let owner = segments.next().unwrap_or_default();
        let name = segments.next().unwrap_or_default();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(ConfigError::InvalidSlug {
                value: value.to_owned(),
            });
        }
        Ok(Self(value.to_owned()))
    }

    /// First path segment of the slug.
    pub fn owner(&self) -> &str {
        self.0.split('/').next().unwrap_or_default()
    }

    /// Second path segment of the slug.
    pub fn name(&self) -> &str {
        self.0.split('/').nth(1).unwrap_or_default()
    }

    /// SSH remote address for this slug.
    pub fn ssh_uri(&self) -> String {
        format!("git@github.com:{}.git", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Slug {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Slug::parse(&value)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// Repo
// ---------------------------------------------------------------------------

/// One managed repository: the user's fork (`origin`) tracking a canonical
/// source-of-truth repository (`upstream`).
///
/// The remote URIs and the fork owner are derived once at construction.
/// `work_dir` stays `None` until the clone orchestrator has produced a local
/// working tree; no check may run before that.
#[derive(Debug, Clone)]
pub struct Repo {
    pub name: RepoName,
    pub origin: Slug,
    pub upstream: Slug,
    pub origin_uri: String,
    pub upstream_uri: String,
    pub origin_owner: String,
    pub work_dir: Option<PathBuf>,
}

impl Repo {
    pub fn new(name: RepoName, origin: Slug, upstream: Slug) -> Self {
        let origin_uri = origin.ssh_uri();
        let upstream_uri = upstream.ssh_uri();
        let origin_owner = origin.owner().to_owned();
        Self {
            name,
            origin,
            upstream,
            origin_uri,
            upstream_uri,
            origin_owner,
            work_dir: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_name_display() {
        assert_eq!(RepoName::from("pytest-ansible").to_string(), "pytest-ansible");
    }

    #[test]
    fn slug_parses_owner_name() {
        let slug = Slug::parse("ansible/ansible-creator").expect("valid slug");
        assert_eq!(slug.owner(), "ansible");
        assert_eq!(slug.name(), "ansible-creator");
        assert_eq!(slug.to_string(), "ansible/ansible-creator");
    }

    #[test]
    fn slug_derives_ssh_uri() {
        let slug = Slug::parse("me/project").expect("valid slug");
        assert_eq!(slug.ssh_uri(), "git@github.com:me/project.git");
    }

    #[test]
    fn slug_rejects_missing_separator() {
        assert!(matches!(
            Slug::parse("just-a-name"),
            Err(ConfigError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn slug_rejects_empty_segments() {
        assert!(Slug::parse("/name").is_err());
        assert!(Slug::parse("owner/").is_err());
        assert!(Slug::parse("").is_err());
    }

    #[test]
    fn slug_rejects_extra_segments() {
        assert!(Slug::parse("a/b/c").is_err());
    }

    #[test]
    fn repo_derives_uris_and_owner_at_construction() {
        let repo = Repo::new(
            RepoName::from("proj"),
            Slug::parse("me/proj").expect("origin"),
            Slug::parse("org/proj").expect("upstream"),
        );
        assert_eq!(repo.origin_uri, "git@github.com:me/proj.git");
        assert_eq!(repo.upstream_uri, "git@github.com:org/proj.git");
        assert_eq!(repo.origin_owner, "me");
        assert!(repo.work_dir.is_none());
    }
}
