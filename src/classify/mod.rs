//! Project classification: decision logic and the one-shot pipeline
//! composing scanner, classifier, and interactivity detector.

pub mod classifier;
pub mod makefile;
pub mod types;

pub use classifier::classify;
pub use types::{BuildSystemInfo, FileInventory, Language, ProjectClassification};

use crate::error::ClassifyError;
use crate::interactive;
use crate::inventory::{InventoryScanner, ScanConfig};
use std::path::Path;
use tracing::info;

/// Classifies the project tree at `root` under the display name `name`.
///
/// One-shot: scans the tree, classifies the inventory, and merges the
/// interactivity report into the returned record. Only a missing or invalid
/// root propagates as an error; everything else resolves to a best-effort
/// classification.
pub fn classify_path(
    name: &str,
    root: &Path,
    config: &ScanConfig,
) -> Result<ProjectClassification, ClassifyError> {
    let scanner = InventoryScanner::new(root.to_path_buf())?.with_config(config.clone());
    let inventory = scanner.scan();
    let build = BuildSystemInfo::from_inventory(&inventory, scanner.root());

    let mut record = classifier::classify(name, &inventory, &build);

    let report = interactive::detect(scanner.root(), config);
    record.is_interactive = report.is_interactive;
    record.interactive_reason = report.reason;

    info!(
        project = name,
        language = %record.language,
        executable = %record.executable_name,
        interactive = record.is_interactive,
        "Classification completed"
    );

    Ok(record)
}
