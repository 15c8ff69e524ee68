//! Implementation of `txtdocs index`.

use std::process::ExitCode;

use serde::Serialize;
use txtdocs_index::{BuildOptions, IngestReport, build_index};

use crate::cli::{args::IndexCommand, context::CommandContext, output::print_json};

/// Machine-readable summary printed after a build.
#[derive(Debug, Serialize, PartialEq)]
pub struct IndexSummary {
    /// Documents in the new index.
    pub num_docs: u64,
    /// Build duration in seconds, rounded to milliseconds.
    pub build_seconds: f64,
}

impl From<&IngestReport> for IndexSummary {
    fn from(report: &IngestReport) -> Self {
        Self {
            num_docs: report.num_docs,
            build_seconds: (report.build_seconds * 1000.0).round() / 1000.0,
        }
    }
}

/// Rebuilds the index from a directory of text files.
pub fn run(ctx: &CommandContext, cmd: &IndexCommand) -> ExitCode {
    let index_path = ctx.index_path();
    let options = BuildOptions {
        stemmer: ctx.config.search.stemmer.clone(),
        heap_size: ctx.config.index.writer_heap_bytes,
    };

    let report = match build_index(&cmd.dir, &index_path, &options) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: indexing failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    for (path, reason) in &report.skipped {
        eprintln!("warning: could not read {}: {reason}", path.display());
    }
    eprintln!(
        "Indexing complete: {} files in {:.3}s",
        report.num_docs, report.build_seconds
    );

    print_json(&IndexSummary::from(&report))
}
