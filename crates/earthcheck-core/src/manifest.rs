//! Minimal Cargo manifest view for cdylib name extraction
//!
//! Only the fields the audit needs are deserialized; everything else in a
//! Cargo.toml is ignored. Only `cdylib` targets produce the `.wasm`
//! artifacts the Earthfiles publish, so every other manifest is
//! "not applicable" rather than an error.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// The crate-type entry that marks a wasm-producing library target
const CDYLIB: &str = "cdylib";

/// `[package]` section fields the audit reads
#[derive(Debug, Clone, Default, Deserialize)]
struct PackageSection {
    name: Option<String>,
}

/// `[lib]` section fields the audit reads
#[derive(Debug, Clone, Default, Deserialize)]
struct LibSection {
    name: Option<String>,
    #[serde(rename = "crate-type", default)]
    crate_type: Vec<String>,
}

/// Partial view of a Cargo.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CargoManifest {
    #[serde(default)]
    package: Option<PackageSection>,
    #[serde(default)]
    lib: Option<LibSection>,
}

impl CargoManifest {
    /// Parse a manifest from TOML content
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The declared name of the cdylib target, if this manifest has one
    ///
    /// Returns `None` for manifests whose `lib.crate-type` does not list
    /// `cdylib` (including workspace-only manifests with no `[lib]` at all).
    /// The explicit `lib.name` wins; otherwise the package name is the
    /// library name, which is Cargo's own fallback.
    fn cdylib_name(&self) -> Option<&str> {
        let lib = self.lib.as_ref()?;
        if !lib.crate_type.iter().any(|t| t == CDYLIB) {
            return None;
        }
        lib.name
            .as_deref()
            .or_else(|| self.package.as_ref()?.name.as_deref())
    }
}

/// Read `path` and return the cdylib name it declares, if any.
///
/// Malformed TOML is fatal; a cdylib target with no name anywhere is too.
pub fn cdylib_name(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path)?;
    let manifest = CargoManifest::parse(&content).map_err(|source| Error::ManifestParse {
        path: path.to_path_buf(),
        source,
    })?;

    match manifest.cdylib_name() {
        Some(name) => Ok(Some(name.to_string())),
        None => {
            // Distinguish "not a cdylib" from "cdylib with no name".
            let is_cdylib = manifest
                .lib
                .as_ref()
                .is_some_and(|lib| lib.crate_type.iter().any(|t| t == CDYLIB));
            if is_cdylib {
                Err(Error::MissingCrateName {
                    path: path.to_path_buf(),
                })
            } else {
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cdylib_with_explicit_lib_name() {
        let manifest = CargoManifest::parse(
            r#"
[package]
name = "http-proxy"

[lib]
name = "http_proxy_mod"
crate-type = ["cdylib"]
"#,
        )
        .unwrap();
        assert_eq!(manifest.cdylib_name(), Some("http_proxy_mod"));
    }

    #[test]
    fn test_cdylib_falls_back_to_package_name() {
        let manifest = CargoManifest::parse(
            r#"
[package]
name = "doc-sync"
version = "0.1.0"

[lib]
crate-type = ["cdylib"]
"#,
        )
        .unwrap();
        assert_eq!(manifest.cdylib_name(), Some("doc-sync"));
    }

    #[test]
    fn test_non_cdylib_is_not_applicable() {
        let manifest = CargoManifest::parse(
            r#"
[package]
name = "helper"

[lib]
crate-type = ["rlib"]
"#,
        )
        .unwrap();
        assert_eq!(manifest.cdylib_name(), None);
    }

    #[test]
    fn test_missing_lib_section_is_not_applicable() {
        let manifest = CargoManifest::parse("[package]\nname = \"bin-only\"\n").unwrap();
        assert_eq!(manifest.cdylib_name(), None);
    }

    #[test]
    fn test_workspace_only_manifest_is_not_applicable() {
        let manifest = CargoManifest::parse("[workspace]\nmembers = [\"crates/*\"]\n").unwrap();
        assert_eq!(manifest.cdylib_name(), None);
    }

    #[test]
    fn test_mixed_crate_types_still_count() {
        let manifest = CargoManifest::parse(
            r#"
[package]
name = "dual"

[lib]
crate-type = ["rlib", "cdylib"]
"#,
        )
        .unwrap();
        assert_eq!(manifest.cdylib_name(), Some("dual"));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        assert!(CargoManifest::parse("[lib\ncrate-type = ]").is_err());
    }

    #[test]
    fn test_nameless_cdylib_is_fatal() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("Cargo.toml");
        std::fs::write(&path, "[lib]\ncrate-type = [\"cdylib\"]\n").unwrap();

        let err = cdylib_name(&path).unwrap_err();
        assert!(matches!(err, Error::MissingCrateName { .. }));
    }
}
