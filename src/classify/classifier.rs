//! The classification decision function: priority-order language selection,
//! per-language qualifiers, and executable-name inference.

use super::makefile;
use super::types::{BuildSystemInfo, FileInventory, Language, ProjectClassification};
use crate::interactive::NO_MATCH_REASON;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Classifies a project from its file inventory and build-system flags.
///
/// Deterministic: the same inputs always produce the same record. Ambiguity
/// (multiple languages present) resolves through `Language::PRIORITY`, and a
/// tree with no recognized source files yields the `unknown` record rather
/// than an error. Interactivity fields are filled with the negative default;
/// the pipeline merges the detector's report afterwards.
pub fn classify(
    name: &str,
    inventory: &FileInventory,
    build: &BuildSystemInfo,
) -> ProjectClassification {
    let language = Language::PRIORITY
        .iter()
        .copied()
        .find(|lang| inventory.count(*lang) > 0)
        .unwrap_or(Language::Unknown);

    debug!(project = name, language = %language, "Selected primary language");

    let source_files = inventory.files(language).to_vec();
    let (description, has_dependencies, dependency_manifest, build_system) =
        qualifiers(name, language, inventory, build);

    let executable_name = infer_executable(
        language,
        &source_files,
        build,
        build_system.as_deref() == Some("Makefile"),
    );

    ProjectClassification {
        language,
        description,
        source_files,
        has_dependencies,
        dependency_manifest,
        build_system,
        executable_name,
        is_interactive: false,
        interactive_reason: NO_MATCH_REASON.to_string(),
    }
}

type Qualifiers = (String, bool, Option<String>, Option<String>);

fn qualifiers(
    name: &str,
    language: Language,
    inventory: &FileInventory,
    build: &BuildSystemInfo,
) -> Qualifiers {
    match language {
        Language::Python | Language::JavaScript => {
            let manifest = language.manifest().unwrap_or_default();
            if inventory.has_manifest(language) {
                (
                    format!("{}: {} project with {}", name, language.name(), manifest),
                    true,
                    Some(manifest.to_string()),
                    None,
                )
            } else {
                (
                    format!("{}: {} project", name, language.name()),
                    false,
                    None,
                    None,
                )
            }
        }
        Language::TypeScript => {
            // TypeScript projects commonly share the JavaScript package
            // manifest, so dependency status comes from that signal. A
            // missing tsconfig.json degrades the description, not the
            // classification.
            let description = if build.has_tsconfig {
                format!("{}: TypeScript project with tsconfig.json", name)
            } else {
                format!("{}: TypeScript project", name)
            };
            let manifest = build.has_package_json.then(|| "package.json".to_string());
            (description, build.has_package_json, manifest, None)
        }
        Language::C | Language::Cpp | Language::Go => {
            if build.has_makefile {
                (
                    format!("{}: {} project with Makefile", name, language.name()),
                    false,
                    None,
                    Some("Makefile".to_string()),
                )
            } else {
                (
                    format!("{}: {} project", name, language.name()),
                    false,
                    None,
                    None,
                )
            }
        }
        Language::Java | Language::Rust => (
            format!("{}: {} project", name, language.name()),
            false,
            None,
            None,
        ),
        Language::Unknown => (format!("{}: Unknown project type", name), false, None, None),
    }
}

/// Infers the entrypoint/executable name once the language is fixed. Always
/// produces a name; every branch bottoms out in a language-appropriate
/// default.
fn infer_executable(
    language: Language,
    files: &[String],
    build: &BuildSystemInfo,
    uses_makefile: bool,
) -> String {
    if uses_makefile {
        if let Some(path) = &build.makefile_path {
            match fs::read_to_string(path) {
                Ok(content) => {
                    if let Some(target) = makefile::resolve_target(&content) {
                        return target;
                    }
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Failed to read Makefile, using fallback");
                }
            }
        }
        return files
            .first()
            .map(|f| stem(f))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "a.out".to_string());
    }

    match language {
        Language::TypeScript => {
            // Declaration files are never entrypoints.
            let runnable: Vec<&String> = files
                .iter()
                .filter(|f| f.ends_with(".ts") && !f.ends_with(".d.ts"))
                .collect();

            if let Some(first) = runnable.first() {
                for preferred in ["index.ts", "main.ts", "app.ts"] {
                    if runnable.iter().any(|f| f.as_str() == preferred) {
                        return preferred.to_string();
                    }
                }
                (*first).clone()
            } else {
                files
                    .first()
                    .cloned()
                    .unwrap_or_else(|| "index.ts".to_string())
            }
        }
        Language::Java => {
            // Java entrypoints keep the source file name, extension included.
            for file in files {
                let lower = file.to_lowercase();
                if lower.contains("main") || lower.contains("app") {
                    return file.clone();
                }
            }
            files
                .first()
                .cloned()
                .unwrap_or_else(|| "Main.java".to_string())
        }
        // Go binaries take the conventional name regardless of source layout.
        Language::Go => "main".to_string(),
        Language::Python => files
            .first()
            .cloned()
            .unwrap_or_else(|| "main.py".to_string()),
        Language::JavaScript => files
            .first()
            .cloned()
            .unwrap_or_else(|| "index.js".to_string()),
        _ => files.first().cloned().unwrap_or_else(|| "main".to_string()),
    }
}

fn stem(file_name: &str) -> String {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
        .to_string()
}
