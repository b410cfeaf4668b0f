use crate::config::{CollectorConfig, ExtensionSet};
use crate::fs::{collect_files, display_path, WalkerFactory};
use log::{debug, info};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A discovered file. Its position in the discovery list is the index the user selects by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    display: String,
    extension: String,
}

impl FileEntry {
    pub fn new(path: PathBuf, display: String, extension: String) -> Self {
        Self { path, display, extension }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn display_path(&self) -> &str {
        &self.display
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }
}

/// Extension without the leading dot. Dotfiles such as `.env` have none.
pub fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

pub fn discover(walker: &dyn WalkerFactory, config: &CollectorConfig, requested: &ExtensionSet) -> Vec<FileEntry> {
    let root = walker.root();
    let entries: Vec<FileEntry> = collect_files(walker, &config.ignored)
        .into_iter()
        .filter_map(|path| {
            let ext = extension_of(&path)?;
            if !(requested.contains(ext) && config.extensions.contains(ext)) {
                return None;
            }
            let ext = ext.to_string();
            let display = display_path(root, &path);
            Some(FileEntry::new(path, display, ext))
        })
        .collect();
    info!("Discovered {} file(s) under {}", entries.len(), root.display());
    entries
}

/// Allowed extensions actually present in the tree, sorted.
pub fn possible_extensions(walker: &dyn WalkerFactory, config: &CollectorConfig) -> Vec<String> {
    let found: BTreeSet<String> = collect_files(walker, &config.ignored)
        .iter()
        .filter_map(|p| extension_of(p))
        .filter(|ext| config.extensions.contains(ext))
        .map(str::to_string)
        .collect();
    debug!("Possible extensions: {:?}", found);
    found.into_iter().collect()
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
