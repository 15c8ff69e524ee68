//! Command implementations and dispatch.

pub mod config;
pub mod explain;
pub mod index;
pub mod repl;
pub mod search;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Index(cmd) => index::run(ctx, &cmd),
        Commands::Repl(cmd) => repl::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Explain(cmd) => explain::run(&cmd),
        Commands::Config => config::run(ctx),
    }
}
