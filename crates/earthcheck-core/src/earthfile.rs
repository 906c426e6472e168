//! Earthfile artifact name extraction
//!
//! Earthfiles are scanned as plain text, not parsed as a grammar. The only
//! directives that matter are the two ways a target names its published
//! `.wasm` output: `--out=<name>.wasm` and `SAVE ARTIFACT ... <name>.wasm`.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// File name of an Earthly build recipe
const EARTHFILE: &str = "Earthfile";

/// Pattern to match wasm artifact directives and capture the artifact name
///
/// `SAVE ARTIFACT` may put source paths or flags before the artifact, so
/// that branch tolerates a same-line gap; `--out=` names it directly.
static ARTIFACT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:--out=|SAVE ARTIFACT [^\n]*?)([A-Za-z0-9_-]+)\.wasm").unwrap()
});

/// Extract the wasm artifact name declared in `dir`'s Earthfile.
///
/// Returns `None` if the directory has no Earthfile or the Earthfile names
/// no `.wasm` artifact; neither case is an error, since directories mixing
/// Rust and non-Rust build systems are expected. The first directive by
/// text position wins; later ones in the same file are ignored.
pub fn artifact_name(dir: &Path) -> Result<Option<String>> {
    let path = dir.join(EARTHFILE);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    Ok(first_artifact(&content))
}

fn first_artifact(content: &str) -> Option<String> {
    ARTIFACT_PATTERN
        .captures(content)
        .map(|cap| cap[1].to_string())
}
