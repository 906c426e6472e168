//! Consistency checks between Cargo cdylib names and Earthly artifact names
//!
//! Wasm modules are declared twice: once as a `cdylib` target in a
//! `Cargo.toml`, and once as the published artifact name in the Earthfile
//! that builds the directory. This crate walks a source tree and reports
//! every directory where the two declarations disagree, so CI can enforce
//! the naming contract.
//!
//! # Pipeline
//!
//! ```text
//! walker -> manifest parser -> Earthfile scanner -> normalize -> Mismatch
//! ```
//!
//! Each directory is processed independently; the walk is sorted so output
//! order is stable across runs.
//!
//! # Example
//!
//! ```no_run
//! use earthcheck_core::audit;
//!
//! let mismatches = audit(std::path::Path::new(".")).unwrap();
//! for m in &mismatches {
//!     println!("{m}");
//! }
//! ```

pub mod audit;
pub mod earthfile;
pub mod error;
pub mod manifest;
pub mod walker;

pub use audit::{Mismatch, audit, normalize};
pub use earthfile::artifact_name;
pub use error::{Error, Result};
pub use manifest::cdylib_name;
pub use walker::find_manifests;
