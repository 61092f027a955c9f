//! Interactivity detection: does the project read from standard input?
//!
//! Walks the tree in the same bounded, lexically sorted order as the
//! inventory scanner and tests every recognized source file against its
//! language's stdin signature patterns, short-circuiting on the first match.

use crate::classify::types::Language;
use crate::inventory::scanner::{walk, ScanConfig};
use crate::inventory::patterns::language_for_path;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Fixed explanation when traversal completes with no match.
pub const NO_MATCH_REASON: &str = "No interactive patterns found";

/// Outcome of one detection pass over a project tree.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractivityReport {
    pub is_interactive: bool,
    pub reason: String,
    pub file: Option<String>,
    pub language: Option<Language>,
}

impl InteractivityReport {
    fn no_match() -> Self {
        Self {
            is_interactive: false,
            reason: NO_MATCH_REASON.to_string(),
            file: None,
            language: None,
        }
    }
}

/// Ordered stdin-read signatures per language, matched case-insensitively.
fn signature_patterns(language: Language) -> &'static [&'static str] {
    match language {
        Language::Python => &[
            r"input\s*\(",
            r"raw_input\s*\(",
            r"sys\.stdin\.read",
            r"getpass\.getpass",
            r"click\.prompt",
        ],
        Language::JavaScript | Language::TypeScript => &[
            r"readline\.",
            r"process\.stdin",
            r"prompt\s*\(",
            r"confirm\s*\(",
            r"inquirer\.",
            r"\.question\s*\(",
        ],
        Language::C => &[
            r"scanf\s*\(",
            r"getchar\s*\(",
            r"gets\s*\(",
            r"fgets\s*\(",
            r"getc\s*\(",
        ],
        Language::Cpp => &[
            r"cin\s*>>",
            r"getline\s*\(",
            r"scanf\s*\(",
            r"getchar\s*\(",
            r"std::cin",
            r"gets\s*\(",
        ],
        Language::Java => &[
            r"Scanner\s*\(",
            r"\.nextLine\s*\(",
            r"\.next\s*\(",
            r"\.nextInt\s*\(",
            r"System\.in",
            r"BufferedReader",
            r"Console\.readLine",
        ],
        Language::Go => &[
            r"fmt\.Scan",
            r"bufio\.NewReader",
            r"os\.Stdin",
            r"fmt\.Scanf",
            r"reader\.ReadString",
        ],
        Language::Rust => &[
            r"stdin\s*\(",
            r"read_line\s*\(",
            r"io::stdin",
            r"stdin\.read_line",
        ],
        Language::Unknown => &[],
    }
}

/// Scans the tree for stdin-read signatures. The first file/pattern match in
/// traversal order wins; files that cannot be decoded as text are skipped
/// silently.
pub fn detect(root: &Path, config: &ScanConfig) -> InteractivityReport {
    let mut compiled: HashMap<Language, Vec<(&'static str, Regex)>> = HashMap::new();
    let mut files_seen = 0usize;

    for result in walk(root, config) {
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

        if files_seen >= config.max_files {
            break;
        }
        files_seen += 1;

        let Some(language) = language_for_path(entry.path()) else {
            continue;
        };

        let content = match fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %entry.path().display(), error = %err, "Skipping undecodable file");
                continue;
            }
        };

        let patterns = compiled
            .entry(language)
            .or_insert_with(|| compile_patterns(language));

        for (pattern, regex) in patterns.iter() {
            if regex.is_match(&content) {
                let file_name = entry
                    .path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string();

                debug!(
                    file = %file_name,
                    language = %language,
                    pattern,
                    "Interactive pattern matched"
                );

                return InteractivityReport {
                    is_interactive: true,
                    reason: format!(
                        "Found interactive pattern \"{}\" in {} ({})",
                        pattern,
                        file_name,
                        language.name()
                    ),
                    file: Some(file_name),
                    language: Some(language),
                };
            }
        }
    }

    InteractivityReport::no_match()
}

fn compile_patterns(language: Language) -> Vec<(&'static str, Regex)> {
    signature_patterns(language)
        .iter()
        .filter_map(|pattern| {
            Regex::new(&format!("(?i){}", pattern))
                .ok()
                .map(|regex| (*pattern, regex))
        })
        .collect()
}
