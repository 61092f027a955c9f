//! Read-only file inventory scanner.
//!
//! Walks a staged project tree once, collecting per-language source file
//! names and existence-only manifest flags. No file contents are read at
//! this stage.

use super::patterns;
use crate::classify::types::FileInventory;
use crate::error::ClassifyError;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Bounds for a single tree walk. Shared by the scanner and the
/// interactivity detector so both see the same slice of the tree.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub max_depth: usize,
    pub max_files: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: 25,
            max_files: 10_000,
        }
    }
}

/// Scans a project root into a [`FileInventory`].
///
/// Traversal is depth-first with siblings sorted by file name, so "first
/// discovered" is stable lexical order on any file system. Directories named
/// in [`patterns::EXCLUDED_DIRS`] are never descended into.
#[derive(Debug)]
pub struct InventoryScanner {
    root: PathBuf,
    config: ScanConfig,
}

impl InventoryScanner {
    pub fn new(root: PathBuf) -> Result<Self, ClassifyError> {
        if !root.exists() {
            return Err(ClassifyError::PathNotFound(root));
        }
        if !root.is_dir() {
            return Err(ClassifyError::NotADirectory(root));
        }

        let root = root.canonicalize().map_err(|source| ClassifyError::Io {
            path: root.clone(),
            source,
        })?;

        debug!(root = %root.display(), "InventoryScanner initialized");

        Ok(Self {
            root,
            config: ScanConfig::default(),
        })
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walks the tree and builds the inventory. Unreadable entries are
    /// skipped with a warning; they never fail the scan.
    pub fn scan(&self) -> FileInventory {
        let start = Instant::now();
        let mut inventory = FileInventory::default();
        let mut files_seen = 0usize;

        for result in walk(&self.root, &self.config) {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "Failed to read directory entry");
                    continue;
                }
            };

            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }

            if files_seen >= self.config.max_files {
                warn!(
                    files_seen,
                    max_files = self.config.max_files,
                    "Reached file limit, stopping scan"
                );
                break;
            }
            files_seen += 1;

            let Some(file_name) = entry.path().file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if let Some(language) = patterns::manifest_language(file_name) {
                inventory.record_manifest(language);
            }

            if let Some(language) = patterns::language_for_path(entry.path()) {
                inventory.record_file(language, file_name.to_string());
            }
        }

        info!(
            root = %self.root.display(),
            files_seen,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Inventory scan completed"
        );

        inventory
    }
}

/// Shared walk construction: bounded depth, no gitignore semantics (staged
/// trees are classified as-is), lexically sorted siblings, fixed exclusion
/// list applied to directories.
pub(crate) fn walk(root: &Path, config: &ScanConfig) -> ignore::Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(Some(config.max_depth))
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            // The root is always kept, whatever it happens to be named.
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            !(is_dir && patterns::is_excluded_dir(entry.path()))
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::types::Language;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        fs::write(base.join("app.py"), "print('hi')").unwrap();
        fs::write(base.join("requirements.txt"), "flask\n").unwrap();
        fs::create_dir(base.join("web")).unwrap();
        fs::write(base.join("web/index.js"), "console.log(1)").unwrap();
        fs::write(base.join("web/package.json"), "{}").unwrap();

        // Cached dependencies must not be inventoried.
        fs::create_dir(base.join("node_modules")).unwrap();
        fs::write(base.join("node_modules/ignored.js"), "x").unwrap();
        fs::create_dir(base.join(".git")).unwrap();
        fs::write(base.join(".git/config.py"), "x").unwrap();

        dir
    }

    #[test]
    fn test_scanner_invalid_path() {
        let err = InventoryScanner::new(PathBuf::from("/nonexistent/path")).unwrap_err();
        assert!(matches!(err, ClassifyError::PathNotFound(_)));
    }

    #[test]
    fn test_scanner_path_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        let err = InventoryScanner::new(file).unwrap_err();
        assert!(matches!(err, ClassifyError::NotADirectory(_)));
    }

    #[test]
    fn test_scan_collects_files_and_manifests() {
        let dir = create_test_tree();
        let scanner = InventoryScanner::new(dir.path().to_path_buf()).unwrap();
        let inventory = scanner.scan();

        assert_eq!(inventory.files(Language::Python), &["app.py"]);
        assert_eq!(inventory.files(Language::JavaScript), &["index.js"]);
        assert!(inventory.has_manifest(Language::Python));
        assert!(inventory.has_manifest(Language::JavaScript));
        assert!(!inventory.has_manifest(Language::TypeScript));
    }

    #[test]
    fn test_scan_excludes_cache_and_vcs_dirs() {
        let dir = create_test_tree();
        let scanner = InventoryScanner::new(dir.path().to_path_buf()).unwrap();
        let inventory = scanner.scan();

        assert!(!inventory
            .files(Language::JavaScript)
            .contains(&"ignored.js".to_string()));
        assert!(!inventory
            .files(Language::Python)
            .contains(&"config.py".to_string()));
    }

    #[test]
    fn test_scan_order_is_lexical() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        fs::write(base.join("zeta.py"), "").unwrap();
        fs::write(base.join("alpha.py"), "").unwrap();
        fs::write(base.join("mid.py"), "").unwrap();

        let scanner = InventoryScanner::new(base.to_path_buf()).unwrap();
        let inventory = scanner.scan();

        assert_eq!(
            inventory.files(Language::Python),
            &["alpha.py", "mid.py", "zeta.py"]
        );
    }

    #[test]
    fn test_scan_respects_max_depth() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        fs::write(base.join("top.go"), "").unwrap();
        fs::create_dir_all(base.join("a/b")).unwrap();
        fs::write(base.join("a/b/deep.go"), "").unwrap();

        let scanner = InventoryScanner::new(base.to_path_buf())
            .unwrap()
            .with_config(ScanConfig {
                max_depth: 1,
                ..Default::default()
            });
        let inventory = scanner.scan();

        assert_eq!(inventory.files(Language::Go), &["top.go"]);
    }

    #[test]
    fn test_scan_respects_max_files() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        for i in 0..10 {
            fs::write(base.join(format!("f{i}.py")), "").unwrap();
        }

        let scanner = InventoryScanner::new(base.to_path_buf())
            .unwrap()
            .with_config(ScanConfig {
                max_files: 3,
                ..Default::default()
            });
        let inventory = scanner.scan();

        assert_eq!(inventory.count(Language::Python), 3);
    }

    #[test]
    fn test_duplicate_basenames_are_kept() {
        let dir = TempDir::new().unwrap();
        let base = dir.path();
        fs::write(base.join("main.c"), "").unwrap();
        fs::create_dir(base.join("sub")).unwrap();
        fs::write(base.join("sub/main.c"), "").unwrap();

        let scanner = InventoryScanner::new(base.to_path_buf()).unwrap();
        let inventory = scanner.scan();

        assert_eq!(inventory.files(Language::C), &["main.c", "main.c"]);
    }
}
