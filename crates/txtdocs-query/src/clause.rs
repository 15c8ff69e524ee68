//! Semantic clauses derived from lexer matches.

use std::fmt;

use serde::Serialize;

use crate::{
    field::Field,
    lexer::{RawMatch, tokenize},
};

/// Whether a clause matches an exact phrase or loose words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClauseKind {
    /// Quoted text that must appear verbatim.
    Phrase,
    /// Bare text matched word by word.
    Term,
}

/// Which fields a clause searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Only the named field.
    Named(Field),
    /// Both the name and content fields.
    Both,
}

impl Scope {
    /// Returns the fields this scope covers.
    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Named(Field::Name) => &[Field::Name],
            Self::Named(Field::Content) => &[Field::Content],
            Self::Both => &Field::ALL,
        }
    }
}

/// One field-scoped or unscoped phrase or term of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    /// Phrase or term.
    pub kind: ClauseKind,
    /// Fields searched.
    pub scope: Scope,
    /// The phrase or term text.
    pub text: String,
}

impl Clause {
    /// Creates a term clause.
    pub fn term(scope: Scope, text: impl Into<String>) -> Self {
        Self {
            kind: ClauseKind::Term,
            scope,
            text: text.into(),
        }
    }

    /// Creates a phrase clause.
    pub fn phrase(scope: Scope, text: impl Into<String>) -> Self {
        Self {
            kind: ClauseKind::Phrase,
            scope,
            text: text.into(),
        }
    }
}

impl From<RawMatch> for Clause {
    fn from(raw: RawMatch) -> Self {
        let scope = raw.field.map_or(Scope::Both, Scope::Named);
        if raw.is_phrase {
            Self::phrase(scope, raw.text)
        } else {
            Self::term(scope, raw.text)
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Scope::Named(field) = self.scope {
            write!(f, "{field}:")?;
        }
        match self.kind {
            ClauseKind::Phrase => write!(f, "\"{}\"", self.text),
            ClauseKind::Term => f.write_str(&self.text),
        }
    }
}

/// Parses a query string into its clauses, in source order.
///
/// Never fails: malformed fragments are dropped by the lexer.
pub fn parse(input: &str) -> Vec<Clause> {
    tokenize(input).into_iter().map(Clause::from).collect()
}
