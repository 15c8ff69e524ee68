//! Implementation of `txtdocs search`.

use std::{io, process::ExitCode};

use txtdocs_index::QueryBackend;
use txtdocs_query::compile_query;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{print_json, write_hits},
};

/// Runs one query and prints the ranked hits, as lines or as a JSON array.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let searcher = match ctx.searcher() {
        Ok(s) => s,
        Err(code) => return code,
    };

    let condition = compile_query(&cmd.query_string());
    let hits = match searcher.execute(&condition, ctx.limit(cmd.limit)) {
        Ok(hits) => hits,
        Err(e) => {
            eprintln!("error: search failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&hits);
    }
    if let Err(e) = write_hits(&mut io::stdout().lock(), &hits) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
