use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Static project classifier for container image generation
#[derive(Parser, Debug)]
#[command(
    name = "shipbox",
    about = "Static project classifier for container image generation",
    version,
    long_about = "shipbox inspects a staged project directory tree and produces a structured \
                  classification: primary language, build tooling, dependency manifests, \
                  stdin-interactivity, and the inferred entrypoint. The record feeds \
                  downstream container-image tooling."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Classify a project directory tree",
        long_about = "Walks the project tree, determines the primary language by fixed \
                      priority order, infers the entrypoint, and reports whether the \
                      program reads from standard input.\n\n\
                      Examples:\n  \
                      shipbox classify\n  \
                      shipbox classify /path/to/project\n  \
                      shipbox classify --format json -o report.json\n  \
                      shipbox classify --name billing-service /srv/staged/billing"
    )]
    Classify(ClassifyArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the staged project tree (defaults to current directory)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'n',
        long,
        value_name = "NAME",
        help = "Project display name (defaults to the directory name)"
    )]
    pub name: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "N",
        default_value = "25",
        help = "Maximum directory depth to walk"
    )]
    pub max_depth: usize,

    #[arg(
        long,
        value_name = "N",
        default_value = "10000",
        help = "Maximum number of files to inspect"
    )]
    pub max_files: usize,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
