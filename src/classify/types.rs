//! Core data model: supported languages, the file inventory produced by the
//! scanner, build-system flags derived from it, and the classification record
//! consumed by downstream tooling.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Closed set of languages the classifier understands.
///
/// Variants are ordered by classification priority; `PRIORITY` is the
/// authoritative evaluation order. Serialized tags are the stable lowercase
/// names downstream consumers see (`"cpp"` for C++).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Java,
    C,
    Cpp,
    Go,
    Rust,
    Unknown,
}

impl Language {
    /// Fixed priority order for primary-language selection. Polyglot trees
    /// classify as the highest-priority language present, regardless of file
    /// counts.
    pub const PRIORITY: &'static [Language] = &[
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::Go,
        Language::Rust,
    ];

    /// Stable lowercase tag, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Java => "java",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Unknown => "unknown",
        }
    }

    /// Human-readable name used in descriptions.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Java => "Java",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Unknown => "Unknown",
        }
    }

    /// Canonical dependency manifest for the language, if it has one.
    pub fn manifest(&self) -> Option<&'static str> {
        match self {
            Language::Python => Some("requirements.txt"),
            Language::JavaScript => Some("package.json"),
            Language::TypeScript => Some("tsconfig.json"),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-language slice of the inventory: file names in discovery order plus
/// whether the language's canonical manifest was seen anywhere under the root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageEntry {
    pub files: Vec<String>,
    pub has_manifest: bool,
}

impl LanguageEntry {
    pub fn count(&self) -> usize {
        self.files.len()
    }
}

/// Everything the scanner found, keyed by language. Built once per
/// classification run and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileInventory {
    entries: BTreeMap<Language, LanguageEntry>,
}

impl FileInventory {
    pub fn record_file(&mut self, language: Language, file_name: String) {
        self.entries.entry(language).or_default().files.push(file_name);
    }

    pub fn record_manifest(&mut self, language: Language) {
        self.entries.entry(language).or_default().has_manifest = true;
    }

    pub fn files(&self, language: Language) -> &[String] {
        self.entries
            .get(&language)
            .map(|e| e.files.as_slice())
            .unwrap_or(&[])
    }

    pub fn count(&self, language: Language) -> usize {
        self.entries.get(&language).map(|e| e.count()).unwrap_or(0)
    }

    pub fn has_manifest(&self, language: Language) -> bool {
        self.entries
            .get(&language)
            .map(|e| e.has_manifest)
            .unwrap_or(false)
    }

    /// True when no supported-language file was found anywhere.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(|e| e.files.is_empty())
    }
}

/// Build-descriptor and manifest flags derived from the inventory plus a
/// root-level Makefile existence check. Read-only once constructed; the
/// Makefile path is carried so target resolution can read it lazily.
#[derive(Debug, Clone, Default)]
pub struct BuildSystemInfo {
    pub has_makefile: bool,
    pub makefile_path: Option<PathBuf>,
    pub has_requirements: bool,
    pub has_package_json: bool,
    pub has_tsconfig: bool,
}

impl BuildSystemInfo {
    pub fn from_inventory(inventory: &FileInventory, root: &Path) -> Self {
        let makefile = root.join("Makefile");
        let has_makefile = makefile.is_file();

        Self {
            has_makefile,
            makefile_path: has_makefile.then_some(makefile),
            has_requirements: inventory.has_manifest(Language::Python),
            has_package_json: inventory.has_manifest(Language::JavaScript),
            has_tsconfig: inventory.has_manifest(Language::TypeScript),
        }
    }
}

/// The output contract: one record per classified project.
///
/// Field names are stable for downstream consumers. `executable_name`,
/// `language`, and `description` are always populated, including for the
/// `unknown` classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectClassification {
    pub language: Language,
    pub description: String,
    pub source_files: Vec<String>,
    pub has_dependencies: bool,
    pub dependency_manifest: Option<String>,
    pub build_system: Option<String>,
    pub executable_name: String,
    pub is_interactive: bool,
    pub interactive_reason: String,
}

impl fmt::Display for ProjectClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.description)?;
        writeln!(f, "Language: {}", self.language)?;
        writeln!(f, "Executable: {}", self.executable_name)?;
        write!(
            f,
            "Interactive: {}",
            if self.is_interactive { "yes" } else { "no" }
        )
    }
}
