//! Implementation of `txtdocs repl`, the interactive prompt.

use std::{
    io::{self, BufRead, Write},
    process::ExitCode,
    time::Instant,
};

use txtdocs_index::QueryBackend;
use txtdocs_query::compile_query;

use crate::cli::{args::ReplCommand, context::CommandContext, output::write_hits};

/// First line printed when the prompt starts.
const BANNER: &str = "Index ready. Type a query (ENTER to exit).";

/// Sample queries shown under the banner.
const EXAMPLES: &str = "Examples: name:guida  content:\"rete neurale\"  tfidf inversa";

/// Opens the index and reads queries from stdin until a blank line or EOF.
pub fn run(ctx: &CommandContext, cmd: &ReplCommand) -> ExitCode {
    let searcher = match ctx.searcher() {
        Ok(s) => s,
        Err(code) => return code,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_session(&searcher, ctx.limit(cmd.limit), stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the prompt loop over arbitrary input and output streams.
///
/// Each non-blank line is compiled and executed with `limit`; the session ends at the
/// first blank line or at end of input. Backend failures are reported on stderr and do
/// not end the session.
pub fn run_session<B, R, W>(backend: &B, limit: usize, input: R, mut out: W) -> io::Result<()>
where
    B: QueryBackend,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{EXAMPLES}")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        let started = Instant::now();
        let condition = compile_query(query);
        match backend.execute(&condition, limit) {
            Ok(hits) => {
                let ms = started.elapsed().as_secs_f64() * 1000.0;
                writeln!(out, "{} results ({ms:.1} ms):", hits.len())?;
                write_hits(&mut out, &hits)?;
            }
            Err(e) => eprintln!("error: search failed: {e}"),
        }
    }

    writeln!(out, "Bye.")
}
