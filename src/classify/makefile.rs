//! Layered Makefile target resolution.
//!
//! Heuristics are independent pure functions tried in a fixed order; the
//! first one that produces a name wins. The caller supplies the fallback
//! (first source file, extension stripped) when none of them match.

use regex::Regex;
use tracing::debug;

/// Variable names conventionally holding the executable name, in lookup order.
const EXECUTABLE_VARS: &[&str] = &["TARGET", "PROGRAM", "EXECUTABLE", "BINARY", "OUTPUT"];

/// Conventional non-executable targets never reported as the main target.
const SKIP_TARGETS: &[&str] = &[
    "clean",
    "install",
    "all",
    "run",
    "help",
    "test",
    "distclean",
    "check",
];

/// Resolves the main target name from Makefile contents, trying each
/// heuristic in order. Returns `None` when no heuristic matches.
pub fn resolve_target(content: &str) -> Option<String> {
    const HEURISTICS: &[fn(&str) -> Option<String>] =
        &[variable_assignment, output_flag, first_plain_target];

    for heuristic in HEURISTICS {
        if let Some(target) = heuristic(content) {
            debug!(target = %target, "Resolved Makefile target");
            return Some(target);
        }
    }
    None
}

/// Looks up a `NAME = value` assignment at the start of a line.
fn lookup_variable(content: &str, name: &str) -> Option<String> {
    let re = Regex::new(&format!(r"(?m)^{}\s*=\s*(\w+)", name)).ok()?;
    Some(re.captures(content)?.get(1)?.as_str().to_string())
}

/// Heuristic 1: an assignment to a canonical executable variable.
fn variable_assignment(content: &str) -> Option<String> {
    EXECUTABLE_VARS
        .iter()
        .find_map(|var| lookup_variable(content, var))
}

/// Heuristic 2: an `-o <name>` output flag in a compilation command. A
/// `$(VAR)` operand is resolved to its assignment elsewhere in the file.
fn output_flag(content: &str) -> Option<String> {
    let re = Regex::new(r"-o\s+(\$\((\w+)\)|\w+)").ok()?;
    let caps = re.captures(content)?;

    match caps.get(2) {
        Some(var) => lookup_variable(content, var.as_str()),
        None => Some(caps.get(1)?.as_str().to_string()),
    }
}

/// Heuristic 3: the first target name before a colon that is not a special
/// target, a conventional phony target, or a variable assignment.
fn first_plain_target(content: &str) -> Option<String> {
    for line in content.lines() {
        // Recipe lines belong to a previous target.
        if line.starts_with('\t') {
            continue;
        }

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((target, rest)) = line.split_once(':') else {
            continue;
        };
        // `NAME := value` is an assignment, not a rule.
        if rest.starts_with('=') {
            continue;
        }

        let target = target.trim();
        if target.is_empty()
            || target.starts_with('.')
            || target.contains('=')
            || SKIP_TARGETS.contains(&target)
        {
            continue;
        }

        return Some(target.to_string());
    }
    None
}
