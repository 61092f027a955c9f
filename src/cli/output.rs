//! Output formatting for classification records: JSON, YAML, and a
//! human-readable summary.

use anyhow::{Context, Result};

use crate::classify::types::ProjectClassification;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for classification records
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a classification record according to the configured format.
    pub fn format(&self, record: &ProjectClassification) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(record)
                .context("Failed to serialize classification to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(record)
                .context("Failed to serialize classification to YAML"),
            OutputFormat::Human => Ok(self.format_human(record)),
        }
    }

    fn format_human(&self, record: &ProjectClassification) -> String {
        let files = if record.source_files.is_empty() {
            "none".to_string()
        } else {
            record.source_files.join(", ")
        };
        let dependencies = record
            .dependency_manifest
            .as_deref()
            .unwrap_or("none")
            .to_string();
        let build_system = record.build_system.as_deref().unwrap_or("none");
        let interactive = if record.is_interactive {
            format!("yes ({})", record.interactive_reason)
        } else {
            "no".to_string()
        };

        format!(
            "{}\n  Language:     {}\n  Source files: {}\n  Dependencies: {}\n  Build system: {}\n  Executable:   {}\n  Interactive:  {}\n",
            record.description,
            record.language,
            files,
            dependencies,
            build_system,
            record.executable_name,
            interactive,
        )
    }
}
