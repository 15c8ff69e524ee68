//! Clause compiler.
//!
//! Maps each clause to a condition subtree and combines the subtrees under a
//! single `AllOf` root. The per-clause operators are deliberately asymmetric:
//!
//! | clause              | condition                                         |
//! |---------------------|---------------------------------------------------|
//! | `field:"phrase"`    | `FieldMatch(field, Phrase)`                       |
//! | `field:words`       | `FieldMatch(field, Term)`: any word in the field  |
//! | `"phrase"`          | `AnyOf` of a phrase match on each field           |
//! | `words`             | `MultiFieldMatch(And)`: every word, in any field  |

use crate::{
    clause::{Clause, ClauseKind, Scope, parse},
    condition::{Condition, MatchMode, Operator},
};

/// Compiles a single clause into its condition subtree.
pub fn compile_clause(clause: &Clause) -> Condition {
    match (clause.scope, clause.kind) {
        (Scope::Named(field), ClauseKind::Phrase) => {
            Condition::field_match(field, &clause.text, MatchMode::Phrase)
        }
        (Scope::Named(field), ClauseKind::Term) => {
            Condition::field_match(field, &clause.text, MatchMode::Term)
        }
        (Scope::Both, ClauseKind::Phrase) => Condition::AnyOf(
            clause
                .scope
                .fields()
                .iter()
                .map(|&field| Condition::field_match(field, &clause.text, MatchMode::Phrase))
                .collect(),
        ),
        (Scope::Both, ClauseKind::Term) => Condition::MultiFieldMatch {
            fields: clause.scope.fields().to_vec(),
            text: clause.text.clone(),
            operator: Operator::And,
        },
    }
}

/// Compiles a clause list into one condition.
///
/// The root is an `AllOf` with one child per clause, in order. An empty list
/// compiles to [`Condition::MatchNone`] so that an empty query finds nothing.
pub fn compile(clauses: &[Clause]) -> Condition {
    if clauses.is_empty() {
        return Condition::MatchNone;
    }
    Condition::AllOf(clauses.iter().map(compile_clause).collect())
}

/// Parses and compiles a query string.
pub fn compile_query(input: &str) -> Condition {
    compile(&parse(input))
}
