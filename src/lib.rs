//! shipbox - static project classifier for container image generation
//!
//! This library inspects an already-staged source-code directory tree and
//! produces a structured classification: primary language, build tooling,
//! dependency manifests, stdin-interactivity, and the inferred
//! entrypoint/executable name. The record feeds downstream container-image
//! tooling; classification itself is static, read-only, and deterministic.
//!
//! # Core Concepts
//!
//! - **File Inventory**: per-language source files and manifest flags
//!   collected in one read-only tree walk
//! - **Classification**: a fixed language priority order resolves polyglot
//!   trees; per-language rules infer dependencies, build system, and the
//!   entrypoint, with layered Makefile heuristics for compiled projects
//! - **Interactivity**: per-language stdin signature tables decide whether
//!   the program blocks on user input at runtime
//!
//! # Example Usage
//!
//! ```no_run
//! use shipbox::{classify_path, ScanConfig};
//! use std::path::Path;
//!
//! let record = classify_path(
//!     "billing-service",
//!     Path::new("/srv/staged/billing"),
//!     &ScanConfig::default(),
//! )?;
//!
//! println!("language: {}", record.language);
//! println!("run: {}", record.executable_name);
//! # Ok::<(), shipbox::ClassifyError>(())
//! ```
//!
//! # Project Structure
//!
//! - [`inventory`]: tree walk, extension maps, manifest detection
//! - [`classify`]: priority logic, executable inference, Makefile parsing
//! - [`interactive`]: stdin signature scanning

// Public modules
pub mod classify;
pub mod cli;
pub mod error;
pub mod interactive;
pub mod inventory;
pub mod util;

// Re-export key types for convenient access
pub use classify::{
    classify_path, BuildSystemInfo, FileInventory, Language, ProjectClassification,
};
pub use error::ClassifyError;
pub use interactive::{InteractivityReport, NO_MATCH_REASON};
pub use inventory::{InventoryScanner, ScanConfig};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_shipbox() {
        assert_eq!(NAME, "shipbox");
    }
}
