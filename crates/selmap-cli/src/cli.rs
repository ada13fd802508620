use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "selmap",
    about = "selmap: char-level diffs and selection projection between text revisions",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with `[diff]` settings and a `policy` key
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the char-level diff between two files
    Diff(DiffArgs),
    /// Carry a selection in the old file over to the new file
    Project(ProjectArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// The original text
    pub old: PathBuf,
    /// The revised text
    pub new: PathBuf,
}

#[derive(Args)]
pub struct ProjectArgs {
    /// The original text
    pub old: PathBuf,
    /// The revised text
    pub new: PathBuf,
    /// Selection start, in chars of the old text
    #[arg(long)]
    pub start: usize,
    /// Selection end, in chars of the old text (defaults to a caret at start)
    #[arg(long)]
    pub end: Option<usize>,
    /// Use a JSON diff instead of recomputing one
    #[arg(long)]
    pub diff: Option<PathBuf>,
    /// Fail on offsets past the end of the old text instead of clamping
    #[arg(long)]
    pub strict: bool,
}
