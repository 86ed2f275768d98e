//! Migration discovery
//!
//! Walks the migrations root and produces a deterministically ordered list
//! of scripts: within each directory, `.sql` files in lexicographic byte
//! order, followed by subdirectories visited in the same order. The result
//! is reproducible for an unchanged tree regardless of filesystem
//! iteration order.

use crate::error::{CoreError, CoreResult};
use std::path::Path;

/// File extension that marks a migration script
pub const MIGRATION_EXTENSION: &str = "sql";

/// A discovered migration script.
///
/// Identity is the path relative to the migrations root; contents are
/// read at discovery time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationScript {
    pub relative_path: String,
    pub contents: String,
}

/// Recursively discover migration scripts under `root`.
///
/// An empty directory yields an empty list; a missing root is an error.
/// Non-matching files are ignored but their directories are still
/// traversed for nested migrations.
pub fn discover_migrations(root: &Path) -> CoreResult<Vec<MigrationScript>> {
    if !root.is_dir() {
        return Err(CoreError::MigrationsDirNotFound {
            path: root.display().to_string(),
        });
    }
    let mut scripts = Vec::new();
    collect_recursive(root, root, &mut scripts)?;
    log::debug!(
        "discovered {} migration scripts under {}",
        scripts.len(),
        root.display()
    );
    Ok(scripts)
}

fn collect_recursive(
    root: &Path,
    dir: &Path,
    scripts: &mut Vec<MigrationScript>,
) -> CoreResult<()> {
    let mut files = Vec::new();
    let mut subdirs = Vec::new();

    for entry in std::fs::read_dir(dir).map_err(|e| CoreError::IoWithPath {
        path: dir.display().to_string(),
        source: e,
    })? {
        let entry = entry.map_err(|e| CoreError::IoWithPath {
            path: dir.display().to_string(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        } else if path.extension().is_some_and(|e| e == MIGRATION_EXTENSION) {
            files.push(path);
        }
    }

    // Byte-order sort; within one directory this is a filename sort.
    files.sort();
    subdirs.sort();

    for path in files {
        let contents = std::fs::read_to_string(&path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let relative_path = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .display()
            .to_string();
        scripts.push(MigrationScript {
            relative_path,
            contents,
        });
    }

    for sub in subdirs {
        collect_recursive(root, &sub, scripts)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "discovery_test.rs"]
mod tests;
