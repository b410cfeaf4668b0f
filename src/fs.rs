use crate::config::IgnoreSet;
use anyhow::{Context, Result};
use ignore::{DirEntry, WalkBuilder};
use log::debug;
use std::path::{Path, PathBuf};

pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> Result<String>;
}

pub struct StdFileReader;

impl FileReader for StdFileReader {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }
}

pub trait WalkerFactory {
    fn root(&self) -> &Path;
    fn build(&self, ignored: &IgnoreSet) -> ignore::Walk;
}

pub struct StdWalkerFactory {
    root: PathBuf,
}

impl StdWalkerFactory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl WalkerFactory for StdWalkerFactory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn build(&self, ignored: &IgnoreSet) -> ignore::Walk {
        let ignored = ignored.clone();
        let mut wb = WalkBuilder::new(&self.root);
        wb.standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_pruned(entry, &ignored));
        wb.build()
    }
}

/// The walk root itself is never pruned, whatever its basename.
fn is_pruned(entry: &DirEntry, ignored: &IgnoreSet) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let pruned = ignored.is_ignored(&entry.file_name().to_string_lossy());
    if pruned {
        debug!("Pruning ignored directory: {}", entry.path().display());
    }
    pruned
}

pub fn collect_files(factory: &dyn WalkerFactory, ignored: &IgnoreSet) -> Vec<PathBuf> {
    factory
        .build(ignored)
        .filter_map(|e| match e {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(is_file_like)
        .map(|e| e.into_path())
        .collect()
}

/// Regular files, plus symlinks that resolve to a file. Directory symlinks are
/// not followed.
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

/// Path relative to the walk root, with forward slashes and no leading `./`.
pub fn display_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let p = rel.to_string_lossy().replace('\\', "/");
    p.strip_prefix("./").unwrap_or(&p).to_string()
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
