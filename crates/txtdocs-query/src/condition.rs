//! Backend-agnostic boolean condition tree.
//!
//! This is the compiled form of a query, handed to a search backend for
//! execution. It carries no scoring or analysis decisions; backends decide how
//! text is split into words and how matches are ranked.

use std::fmt;

use serde::Serialize;

use crate::field::Field;

/// How a [`Condition::FieldMatch`] text is matched against its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The words must appear consecutively, in order.
    Phrase,
    /// Any one word of the text appearing in the field suffices.
    Term,
}

/// How the words of a [`Condition::MultiFieldMatch`] text are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Every word must appear in at least one of the fields.
    And,
    /// Any word appearing in any of the fields suffices.
    Or,
}

/// A compiled query condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Matches no document.
    MatchNone,

    /// Text matched against a single field.
    FieldMatch {
        /// Field to search.
        field: Field,
        /// Text to match.
        text: String,
        /// Phrase or term semantics.
        mode: MatchMode,
    },

    /// Words of a text matched across several fields as one condition.
    MultiFieldMatch {
        /// Fields to search.
        fields: Vec<Field>,
        /// Text whose words are matched.
        text: String,
        /// How the words are combined.
        operator: Operator,
    },

    /// At least one child must match.
    AnyOf(Vec<Self>),

    /// Every child must match.
    AllOf(Vec<Self>),
}

impl Condition {
    /// Creates a single-field match.
    pub fn field_match(field: Field, text: impl Into<String>, mode: MatchMode) -> Self {
        Self::FieldMatch {
            field,
            text: text.into(),
            mode,
        }
    }

    /// Returns true if this is the match-nothing sentinel.
    pub fn is_match_none(&self) -> bool {
        matches!(self, Self::MatchNone)
    }

    /// Returns the child conditions of an `AnyOf` or `AllOf` node.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::AnyOf(children) | Self::AllOf(children) => children,
            _ => &[],
        }
    }

    /// Formats the condition as a tree with the given indentation level.
    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let prefix = "  ".repeat(indent);
        match self {
            Self::MatchNone => writeln!(f, "{prefix}MatchNone"),
            Self::FieldMatch { field, text, mode } => {
                writeln!(f, "{prefix}FieldMatch({field}, {text:?}, {mode:?})")
            }
            Self::MultiFieldMatch {
                fields,
                text,
                operator,
            } => {
                let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
                writeln!(
                    f,
                    "{prefix}MultiFieldMatch([{}], {text:?}, {operator:?})",
                    names.join(", ")
                )
            }
            Self::AnyOf(children) => {
                writeln!(f, "{prefix}AnyOf")?;
                for child in children {
                    child.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
            Self::AllOf(children) => {
                writeln!(f, "{prefix}AllOf")?;
                for child in children {
                    child.fmt_tree(f, indent + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}
