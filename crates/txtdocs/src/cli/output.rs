//! Rendering and JSON serialization for CLI output.

use std::{
    io::{self, Write},
    process::ExitCode,
};

use serde::Serialize;
use txtdocs_index::SearchHit;

/// Formats one ranked hit, `rank` starting at 1.
pub fn format_hit(rank: usize, hit: &SearchHit) -> String {
    format!(
        "{rank:2}. {}  \u{2014}  {}  (score={:.3})",
        hit.name, hit.path, hit.score
    )
}

/// Writes ranked hits, one per line.
pub fn write_hits<W: Write>(out: &mut W, hits: &[SearchHit]) -> io::Result<()> {
    for (i, hit) in hits.iter().enumerate() {
        writeln!(out, "{}", format_hit(i + 1, hit))?;
    }
    Ok(())
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}
