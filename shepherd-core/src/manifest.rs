//! TOML repository manifest.
//!
//! # Format
//!
//! ```toml
//! [repos.ansible-creator]
//! origin = "cidrblock/ansible-creator"
//! upstream = "ansible/ansible-creator"
//! ```
//!
//! One table per repository under `[repos]`, keyed by the logical name.
//! Unknown keys and malformed slugs fail the whole load — a misconfigured
//! manifest must never reach the clone orchestrator.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::data;
use crate::error::ConfigError;
use crate::types::{Repo, RepoName, Slug};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawManifest {
    repos: BTreeMap<String, RawRepo>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRepo {
    origin: Slug,
    upstream: Slug,
}

/// Parse manifest contents into repositories, sorted by logical name.
pub fn parse(contents: &str) -> Result<Vec<Repo>, ConfigError> {
    let raw: RawManifest = toml::from_str(contents)?;
    if raw.repos.is_empty() {
        return Err(ConfigError::EmptyManifest);
    }
    Ok(raw
        .repos
        .into_iter()
        .map(|(name, entry)| Repo::new(RepoName(name), entry.origin, entry.upstream))
        .collect())
}

/// Parse the manifest bundled into the binary.
pub fn bundled() -> Result<Vec<Repo>, ConfigError> {
    parse(data::REPOS_TOML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_repos_in_name_order() {
        let repos = parse(
            r#"
            [repos.zed]
            origin = "me/zed"
            upstream = "org/zed"

            [repos.ansible-creator]
            origin = "me/ansible-creator"
            upstream = "ansible/ansible-creator"
            "#,
        )
        .expect("parse");
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name.0, "ansible-creator");
        assert_eq!(repos[1].name.0, "zed");
        assert_eq!(repos[0].upstream_uri, "git@github.com:ansible/ansible-creator.git");
    }

    #[test]
    fn rejects_missing_upstream() {
        let err = parse(
            r#"
            [repos.proj]
            origin = "me/proj"
            "#,
        )
        .expect_err("missing upstream must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = parse(
            r#"
            [repos.proj]
            origin = "me/proj"
            upstream = "org/proj"
            branch = "main"
            "#,
        )
        .expect_err("unknown key must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_malformed_slug() {
        let err = parse(
            r#"
            [repos.proj]
            origin = "not-a-slug"
            upstream = "org/proj"
            "#,
        )
        .expect_err("bad slug must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_empty_manifest() {
        let err = parse("[repos]\n").expect_err("empty manifest must fail");
        assert!(matches!(err, ConfigError::EmptyManifest));
    }

    #[test]
    fn bundled_manifest_is_valid() {
        let repos = bundled().expect("bundled manifest parses");
        assert!(!repos.is_empty());
        for repo in &repos {
            assert!(repo.origin_uri.starts_with("git@github.com:"));
            assert!(repo.work_dir.is_none());
        }
    }
}
