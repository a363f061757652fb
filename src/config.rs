//! Configuration resolution.
//!
//! Branchkit reads one TOML file per invocation, chosen from two candidates:
//!
//! 1. `.branchkit.toml` in the working directory (project-local)
//! 2. `~/.config/branchkit/config.toml` (user-wide, XDG conventions)
//!
//! Only the first existing candidate is applied; the layers are mutually
//! exclusive, never merged field-by-field. When neither file exists the
//! built-in defaults stand; absence is not an error. Resolution happens
//! fresh on every command invocation and the resolved value is passed
//! explicitly into every command, so there is no ambient settings state.
//!
//! `BRANCHKIT_CONFIG_PATH` overrides the user-wide candidate (used by tests
//! to stay out of the real home directory).

use std::path::{Path, PathBuf};

use anyhow::Context;
use etcetera::BaseStrategy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text;
use crate::util;

/// Project-local override file, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".branchkit.toml";

/// Resolved settings consumed by every command.
///
/// Missing keys in an override file fall back to the field defaults, so a
/// file can override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Separator between words of the branch description (`fix-the-bug`).
    #[serde(default = "default_word_separator")]
    pub word_separator: String,

    /// Separator between the issue ID and the description (`1234/fix-the-bug`).
    #[serde(default = "default_issue_separator")]
    pub issue_separator: String,

    /// When true, commit messages get `<project-key>-<issue-id> - ` prepended
    /// unless already present.
    #[serde(default)]
    pub commits_require_issue_key: bool,

    /// Regex describing a valid issue ID.
    #[serde(default = "default_issue_pattern")]
    pub issue_pattern: String,

    /// Tracker project key prefixed to commit messages (e.g. `DEVU`).
    #[serde(default)]
    pub project_key: String,

    /// Branches that must never be deleted.
    #[serde(default = "default_protected_branches")]
    pub protected_branches: Vec<String>,
}

fn default_word_separator() -> String {
    "-".to_string()
}

fn default_issue_separator() -> String {
    "/".to_string()
}

fn default_issue_pattern() -> String {
    "[0-9]+".to_string()
}

fn default_protected_branches() -> Vec<String> {
    ["main", "master", "development"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_separator: default_word_separator(),
            issue_separator: default_issue_separator(),
            commits_require_issue_key: false,
            issue_pattern: default_issue_pattern(),
            project_key: String::new(),
            protected_branches: default_protected_branches(),
        }
    }
}

/// The user-wide config file candidate.
///
/// `BRANCHKIT_CONFIG_PATH` wins when set. Otherwise XDG conventions apply on
/// Linux and macOS (`~/.config/branchkit/config.toml`), Windows conventions
/// on Windows.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("BRANCHKIT_CONFIG_PATH") {
        return Some(PathBuf::from(path));
    }

    let strategy = etcetera::choose_base_strategy().ok()?;
    Some(strategy.config_dir().join("branchkit").join("config.toml"))
}

impl Config {
    /// Resolve configuration for a command running in `dir`.
    ///
    /// A malformed candidate file is a hard error with context; a missing one
    /// silently falls through.
    pub fn resolve(dir: &Path) -> anyhow::Result<Self> {
        if !util::dir_exists(dir) {
            return Ok(Self::default());
        }

        let mut candidates = vec![dir.join(PROJECT_CONFIG_FILE)];
        candidates.extend(user_config_path());
        Self::resolve_from(&candidates)
    }

    /// Apply the first existing candidate file, or defaults when none exist.
    pub fn resolve_from(candidates: &[PathBuf]) -> anyhow::Result<Self> {
        for candidate in candidates {
            if util::file_exists(candidate) {
                return Self::load_file(candidate);
            }
        }
        Ok(Self::default())
    }

    fn load_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// True when `id` fully matches the configured issue pattern.
    pub fn is_valid_issue_id(&self, id: &str) -> anyhow::Result<bool> {
        let re = self.issue_regex(true)?;
        Ok(re.is_match(id))
    }

    /// Longest leading run of `branch` matching the issue pattern, if any.
    ///
    /// With the default pattern this extracts `1234` from `1234-fix_bug`.
    pub fn leading_issue_id<'a>(&self, branch: &'a str) -> anyhow::Result<Option<&'a str>> {
        let re = self.issue_regex(false)?;
        Ok(re.find(branch).map(|m| m.as_str()))
    }

    /// True when `message` already starts with `<project-key>-<issue-id>`.
    pub fn has_issue_key(&self, message: &str) -> anyhow::Result<bool> {
        let re = Regex::new(&format!(
            "^{}-(?:{})",
            regex::escape(&self.project_key),
            self.issue_pattern
        ))
        .with_context(|| format!("Invalid issue-pattern {:?}", self.issue_pattern))?;
        Ok(re.is_match(message))
    }

    /// True when `branch` is in the protected set (exact match).
    pub fn is_protected(&self, branch: &str) -> bool {
        text::includes(branch, &self.protected_branches)
    }

    fn issue_regex(&self, full_match: bool) -> anyhow::Result<Regex> {
        let pattern = if full_match {
            format!("^(?:{})$", self.issue_pattern)
        } else {
            format!("^(?:{})", self.issue_pattern)
        };
        Regex::new(&pattern).with_context(|| format!("Invalid issue-pattern {:?}", self.issue_pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &str) {
        std::fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.word_separator, "-");
        assert_eq!(config.issue_separator, "/");
        assert!(!config.commits_require_issue_key);
        assert_eq!(config.issue_pattern, "[0-9]+");
        assert_eq!(config.project_key, "");
        assert_eq!(
            config.protected_branches,
            vec!["main", "master", "development"]
        );
    }

    #[test]
    fn test_partial_file_overrides_subset() {
        let config: Config = toml::from_str(r#"project-key = "DEVU""#).unwrap();
        assert_eq!(config.project_key, "DEVU");
        // Everything else stays at its default
        assert_eq!(config.word_separator, "-");
        assert_eq!(
            config.protected_branches,
            vec!["main", "master", "development"]
        );
    }

    #[test]
    fn test_project_local_wins_over_user_file_entirely() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join(PROJECT_CONFIG_FILE);
        let user = dir.path().join("user-config.toml");
        write(&project, r#"project-key = "PROJ""#);
        write(
            &user,
            "project-key = \"HOME\"\nword-separator = \"_\"\n",
        );

        let config = Config::resolve_from(&[project, user]).unwrap();
        assert_eq!(config.project_key, "PROJ");
        // The user file is ignored entirely, not merged: word-separator
        // stays at the built-in default, not the user file's "_".
        assert_eq!(config.word_separator, "-");
    }

    #[test]
    fn test_user_file_applies_when_project_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let project = dir.path().join(PROJECT_CONFIG_FILE);
        let user = dir.path().join("user-config.toml");
        write(&user, r#"project-key = "HOME""#);

        let config = Config::resolve_from(&[project, user]).unwrap();
        assert_eq!(config.project_key, "HOME");
    }

    #[test]
    fn test_no_candidate_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::resolve_from(&[dir.path().join("a.toml"), dir.path().join("b.toml")]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_nonexistent_working_dir_yields_defaults() {
        let config = Config::resolve(Path::new("/no/such/directory")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        write(&path, "not { valid toml");

        let err = Config::resolve_from(&[path]).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_issue_id_validation() {
        let config = Config::default();
        assert!(config.is_valid_issue_id("1234").unwrap());
        assert!(!config.is_valid_issue_id("12a4").unwrap());
        assert!(!config.is_valid_issue_id("").unwrap());
        // Full match required, not a prefix
        assert!(!config.is_valid_issue_id("1234-fix").unwrap());
    }

    #[test]
    fn test_leading_issue_id() {
        let config = Config::default();
        assert_eq!(config.leading_issue_id("1234-fix_bug").unwrap(), Some("1234"));
        assert_eq!(config.leading_issue_id("fix_bug").unwrap(), None);
        assert_eq!(config.leading_issue_id("").unwrap(), None);
    }

    #[test]
    fn test_has_issue_key() {
        let config = Config {
            project_key: "DEVU".to_string(),
            ..Config::default()
        };
        assert!(config.has_issue_key("DEVU-1234 - fix typo").unwrap());
        assert!(!config.has_issue_key("fix typo").unwrap());
        assert!(!config.has_issue_key("DEVU- fix typo").unwrap());
    }

    #[test]
    fn test_custom_issue_pattern() {
        let config: Config = toml::from_str(r#"issue-pattern = "[A-Z]+-[0-9]+""#).unwrap();
        assert!(config.is_valid_issue_id("ABC-42").unwrap());
        assert!(!config.is_valid_issue_id("42").unwrap());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let config: Config = toml::from_str(r#"issue-pattern = "[unclosed""#).unwrap();
        assert!(config.is_valid_issue_id("1").is_err());
    }

    #[test]
    fn test_is_protected() {
        let config = Config::default();
        assert!(config.is_protected("main"));
        assert!(config.is_protected("development"));
        assert!(!config.is_protected("feature"));
        // Exact membership, not substring
        assert!(!config.is_protected("mai"));
    }
}
