//! Query language for txtdocs.
//!
//! A query is a whitespace-separated list of clauses, all of which must match:
//!
//! - **Terms**: `tfidf` - every word must appear in the name or the content
//! - **Phrases**: `"rete neurale"` - exact sequence in the name or the content
//! - **Fields**: `name:guida`, `content:"rete neurale"` - search one field only
//!
//! Parsing never fails. Unrecognized fragments are skipped, and a query with no
//! clauses compiles to a condition that matches nothing.
//!
//! # Example
//!
//! ```
//! use txtdocs_query::{Condition, compile_query};
//!
//! let condition = compile_query("name:guida content:\"rete neurale\" tfidf");
//! assert_eq!(condition.children().len(), 3);
//! assert_eq!(compile_query(""), Condition::MatchNone);
//! ```

#![warn(missing_docs)]

mod clause;
mod compile;
mod condition;
mod field;
mod lexer;

pub use clause::{Clause, ClauseKind, Scope, parse};
pub use compile::{compile, compile_clause, compile_query};
pub use condition::{Condition, MatchMode, Operator};
pub use field::Field;
pub use lexer::{Lexer, RawMatch, tokenize};
