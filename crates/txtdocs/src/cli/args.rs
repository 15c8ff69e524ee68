//! Clap argument definitions for the `txtdocs` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "txtdocs")]
#[command(about = "Search a folder of .txt files by name and content")]
pub struct Cli {
    /// Index directory [default: from config, else .txtdocs/index]
    #[arg(long, global = true)]
    pub index: Option<PathBuf>,

    /// Log diagnostics to stderr (-v for debug, -vv for trace)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to execute; starts the interactive prompt when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Supported `txtdocs` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Rebuild the index from the .txt files in a directory
    Index(IndexCommand),

    /// Read queries interactively until an empty line
    #[command(after_help = "\
Query syntax:
  tfidf                  every word in the name or the content
  \"rete neurale\"         exact phrase in the name or the content
  name:guida             any word in the file name
  content:\"rete neurale\" exact phrase in the content
All clauses must match.")]
    Repl(ReplCommand),

    /// Run a single query and print ranked matches
    Search(SearchCommand),

    /// Show how a query is parsed without searching
    Explain(ExplainCommand),

    /// Show effective configuration settings
    Config,
}

impl Default for Commands {
    fn default() -> Self {
        Self::Repl(ReplCommand::default())
    }
}

/// Arguments for `txtdocs index`.
#[derive(Args, Debug, Clone)]
pub struct IndexCommand {
    /// Folder containing .txt files
    pub dir: PathBuf,
}

/// Arguments for `txtdocs repl`.
#[derive(Args, Debug, Clone, Default)]
pub struct ReplCommand {
    /// Results per query [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Arguments for `txtdocs search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Query words, joined with spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Results to return [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output hits as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl SearchCommand {
    /// Returns the full query string.
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}

/// Arguments for `txtdocs explain`.
#[derive(Args, Debug, Clone)]
pub struct ExplainCommand {
    /// Query words, joined with spaces
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Output the compiled condition as JSON
    #[arg(long)]
    pub json: bool,
}

impl ExplainCommand {
    /// Returns the full query string.
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}

/// Parses CLI arguments from the process environment.
pub fn parse_cli() -> Cli {
    Cli::parse()
}
