//! Extension maps, manifest names, and exclusion rules shared by the scanner
//! and the interactivity detector.

use crate::classify::types::Language;
use std::path::Path;

/// Directories never descended into: version-control metadata, dependency
/// caches, and build output.
pub const EXCLUDED_DIRS: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "vendor",
    "__pycache__",
    ".venv",
    "venv",
    "dist",
    "build",
    "target",
];

/// Source-file extensions mapped to their language.
pub const SOURCE_EXTENSIONS: &[(&str, Language)] = &[
    ("py", Language::Python),
    ("js", Language::JavaScript),
    ("ts", Language::TypeScript),
    ("java", Language::Java),
    ("c", Language::C),
    ("cpp", Language::Cpp),
    ("cc", Language::Cpp),
    ("cxx", Language::Cpp),
    ("go", Language::Go),
    ("rs", Language::Rust),
];

/// Manifest file names whose presence anywhere under the root sets the
/// language's manifest flag. Existence-only; contents are never read.
pub const MANIFEST_FILES: &[(&str, Language)] = &[
    ("requirements.txt", Language::Python),
    ("package.json", Language::JavaScript),
    ("tsconfig.json", Language::TypeScript),
];

/// Maps a file extension (without the dot, case-insensitive) to its language.
pub fn language_for_extension(extension: &str) -> Option<Language> {
    let extension = extension.to_ascii_lowercase();
    SOURCE_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, lang)| *lang)
}

/// Maps a path to its language via the file extension.
pub fn language_for_path(path: &Path) -> Option<Language> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(language_for_extension)
}

/// Maps a manifest file name to the language it signals.
pub fn manifest_language(file_name: &str) -> Option<Language> {
    MANIFEST_FILES
        .iter()
        .find(|(name, _)| *name == file_name)
        .map(|(_, lang)| *lang)
}

/// Checks whether a directory should be skipped during traversal.
pub fn is_excluded_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|name| EXCLUDED_DIRS.contains(&name))
        .unwrap_or(false)
}
