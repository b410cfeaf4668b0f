use globset::{Glob, GlobSet, GlobSetBuilder};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

/// Extensions eligible for collection, without the leading dot.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "js", "jsx", "html", "json", "xml", "yaml", "yml", "scss", "sass", "css", "py", "php",
];

/// Directory basenames pruned from traversal. Entries with `*` are wildcards.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    // version control and editors
    ".git", ".idea", ".vscode", ".vs", ".history",
    // python caches and environments
    "__pycache__", "__init__", "venv", "env", ".venv", ".mypy_cache", ".pytest_cache",
    ".ipynb_checkpoints", ".pylint", ".tox", ".eggs", "*.egg-info",
    // build outputs and dependencies
    "build", "dist", "node_modules", ".serverless", ".local",
    "*.DS_Store",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(extensions.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.0.contains(extension)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Keeps only the requested tokens that are also in this set.
    pub fn restrict<I, S>(&self, requested: I) -> ExtensionSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ExtensionSet(
            requested
                .into_iter()
                .filter(|ext| self.contains(ext.as_ref()))
                .map(|ext| ext.as_ref().to_string())
                .collect(),
        )
    }
}

/// Directory names excluded from traversal, matched against the basename only.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    names: HashSet<String>,
    wildcards: GlobSet,
}

impl IgnoreSet {
    pub fn new<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = HashSet::new();
        let mut builder = GlobSetBuilder::new();
        for entry in entries {
            let entry = entry.as_ref();
            if entry.contains(['*', '?', '[']) {
                let glob = Glob::new(entry).map_err(|source| ConfigError::Pattern {
                    pattern: entry.to_string(),
                    source,
                })?;
                builder.add(glob);
            } else {
                names.insert(entry.to_string());
            }
        }
        let wildcards = builder.build().map_err(|source| ConfigError::Pattern {
            pattern: "<ignore set>".to_string(),
            source,
        })?;
        Ok(Self { names, wildcards })
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.names.contains(name) || self.wildcards.is_match(name)
    }
}

/// Immutable run configuration handed to every phase.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub extensions: ExtensionSet,
    pub ignored: IgnoreSet,
}

impl CollectorConfig {
    pub fn new(extensions: ExtensionSet, ignored: IgnoreSet) -> Self {
        Self { extensions, ignored }
    }

    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self {
            extensions: ExtensionSet::new(DEFAULT_EXTENSIONS.iter().copied()),
            ignored: IgnoreSet::new(DEFAULT_IGNORED_DIRS)?,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
