use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Project Tree - render a directory as an ASCII tree
#[derive(Parser, Debug)]
#[command(name = "project-tree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a directory tree honoring ignore patterns
    Render(RenderArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Root directory to render
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Ignore file name looked up at the root
    #[arg(long, value_name = "NAME")]
    pub ignore_file: Option<String>,

    /// Fallback patterns used when no ignore file is found (comma-separated)
    #[arg(short, long, value_delimiter = ',', value_name = "PATTERNS")]
    pub fallback: Option<Vec<String>>,

    /// List sibling subtrees concurrently
    #[arg(short = 'P', long)]
    pub parallel: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
