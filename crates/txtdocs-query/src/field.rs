//! Searchable document fields.

use std::fmt;

use serde::Serialize;

/// A document field that a query clause can be scoped to.
///
/// This is a closed set: only `name:` and `content:` prefixes scope a clause.
/// Any other `word:` prefix is ordinary query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The document's file name.
    Name,
    /// The document's text content.
    Content,
}

impl Field {
    /// All fields, in the order unscoped clauses search them.
    pub const ALL: [Self; 2] = [Self::Name, Self::Content];

    /// Returns the field's name as written in a query prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Content => "content",
        }
    }

    /// Matches a `<field>:` prefix at the start of `input`.
    ///
    /// Returns the field and the byte length of the prefix, colon included.
    /// Field names are case-sensitive.
    pub(crate) fn strip_prefix(input: &str) -> Option<(Self, usize)> {
        Self::ALL.into_iter().find_map(|field| {
            let name = field.as_str();
            input
                .strip_prefix(name)
                .and_then(|rest| rest.strip_prefix(':'))
                .map(|_| (field, name.len() + 1))
        })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
