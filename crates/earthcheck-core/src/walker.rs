//! Recursive discovery of Cargo.toml files under a scan root
//!
//! The walk is depth-first with directory entries sorted by name at every
//! level, so one run always visits manifests in the same order. Unreadable
//! subtrees are logged and skipped; only an unreadable root is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Error, Result};

/// File name of a Cargo manifest
const MANIFEST_FILE: &str = "Cargo.toml";

/// Directories the walk never descends into
///
/// `target/` holds build output (including copies of manifests from
/// dependency sources), and hidden directories are tool-internal.
fn is_pruned(name: &str) -> bool {
    name == "target" || name.starts_with('.')
}

/// Find every `Cargo.toml` below `root`, in stable path order.
pub fn find_manifests(root: &Path) -> Result<Vec<PathBuf>> {
    // Reading the root is the one traversal failure that is fatal.
    fs::read_dir(root).map_err(|source| Error::RootNotReadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut manifests = Vec::new();
    walk(root, &mut manifests);
    Ok(manifests)
}

fn walk(dir: &Path, manifests: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .collect();
    paths.sort();

    for path in paths {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };
        if path.is_dir() {
            if !is_pruned(name) {
                walk(&path, manifests);
            }
        } else if name == MANIFEST_FILE {
            manifests.push(path);
        }
    }
}
