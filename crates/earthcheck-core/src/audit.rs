//! Audit driver: compare declared cdylib names with Earthly artifact names
//!
//! A mismatch is recorded only when both sides declare a name and the
//! normalized forms differ. A missing Earthfile, a missing directive, or a
//! non-cdylib manifest never counts against a directory.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::earthfile;
use crate::error::Result;
use crate::manifest;
use crate::walker;

/// A directory whose Cargo and Earthly names disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Directory containing the Cargo.toml / Earthfile pair
    pub dir: PathBuf,
    /// Name declared by the Cargo manifest (as written, un-normalized)
    pub cargo_name: String,
    /// Name declared by the Earthfile (as written, un-normalized)
    pub earthly_name: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Cargo '{}' vs Earthly '{}'",
            self.dir.display(),
            self.cargo_name,
            self.earthly_name
        )
    }
}

/// Canonicalize a name for comparison only.
///
/// Earthly artifacts tend to be snake_case while Cargo packages are
/// kebab-case; both collapse to the same canonical form. Never used for
/// display.
pub fn normalize(name: &str) -> String {
    name.replace('-', "_").to_lowercase()
}

/// Scan every manifest under `root` and collect name mismatches.
///
/// The returned list is in walker order (stable path order), so output is
/// reproducible run-to-run. An empty list means the tree is consistent.
pub fn audit(root: &Path) -> Result<Vec<Mismatch>> {
    let mut mismatches = Vec::new();

    for manifest_path in walker::find_manifests(root)? {
        let Some(cargo_name) = manifest::cdylib_name(&manifest_path)? else {
            continue;
        };
        // Manifests discovered by the walker always have a parent.
        let dir = manifest_path.parent().unwrap_or(root);

        let Some(earthly_name) = earthfile::artifact_name(dir)? else {
            debug!(
                "No Earthly artifact declared next to {}",
                manifest_path.display()
            );
            continue;
        };

        if normalize(&cargo_name) != normalize(&earthly_name) {
            mismatches.push(Mismatch {
                dir: dir.to_path_buf(),
                cargo_name,
                earthly_name,
            });
        }
    }

    Ok(mismatches)
}
