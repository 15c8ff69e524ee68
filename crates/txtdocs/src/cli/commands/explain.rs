//! Implementation of `txtdocs explain`.

use std::process::ExitCode;

use txtdocs_query::{Clause, ClauseKind, RawMatch, Scope, compile, tokenize};

use crate::cli::{args::ExplainCommand, output::print_json};

/// Prints the clauses and the compiled condition of a query.
pub fn run(cmd: &ExplainCommand) -> ExitCode {
    let query = cmd.query_string();
    let matches = tokenize(&query);
    let clauses: Vec<Clause> = matches.iter().cloned().map(Clause::from).collect();
    let condition = compile(&clauses);

    if cmd.json {
        return print_json(&condition);
    }

    print!("{}", render(&query, &matches, &clauses, &condition.to_string()));
    ExitCode::SUCCESS
}

/// Renders the human-readable explanation.
fn render(query: &str, matches: &[RawMatch], clauses: &[Clause], tree: &str) -> String {
    let mut out = format!("Query:\n   {query}\n\nClauses:\n");
    if clauses.is_empty() {
        out.push_str("   (none)\n");
    }
    for (i, (raw, clause)) in matches.iter().zip(clauses).enumerate() {
        let kind = match clause.kind {
            ClauseKind::Phrase => "phrase",
            ClauseKind::Term => "term",
        };
        let scope = match clause.scope {
            Scope::Named(field) => field.as_str(),
            Scope::Both => "name|content",
        };
        out.push_str(&format!(
            "  {:2}. {clause}  [{kind} in {scope}, bytes {}..{}]\n",
            i + 1,
            raw.span.start,
            raw.span.end
        ));
    }
    out.push_str("\nCondition:\n");
    for line in tree.lines() {
        out.push_str("   ");
        out.push_str(line);
        out.push('\n');
    }
    out
}
