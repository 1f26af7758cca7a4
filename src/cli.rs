//! CLI argument parsing for the documentation workflow.
//!
//! The CLI is intentionally thin: flags populate explicit build options and
//! paths, so the same core logic can be reused as a library.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for the documentation generator.
#[derive(Parser, Debug)]
#[command(
    name = "decldoc",
    version,
    about = "Generate HTML documentation pages from a declarative doc model",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one HTML page per type in the model
    Generate(GenerateArgs),
    /// Load and validate a model, reporting documented member counts
    Check(CheckArgs),
}

/// Generate command inputs.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the doc model JSON file
    #[arg(long, value_name = "FILE")]
    pub model: PathBuf,

    /// Output directory for rendered pages
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    /// Suppress descriptive doc comments in the output
    #[arg(long)]
    pub no_comments: bool,

    /// Document private members in addition to public ones
    #[arg(long)]
    pub include_private: bool,
}

/// Check command inputs.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the doc model JSON file
    #[arg(long, value_name = "FILE")]
    pub model: PathBuf,

    /// Count private members in addition to public ones
    #[arg(long)]
    pub include_private: bool,
}
