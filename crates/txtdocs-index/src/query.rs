//! Query compiler.
//!
//! Translates a [`Condition`] tree into Tantivy queries. Query text is analyzed with
//! the analyzer of the field it is matched against, so it meets the indexed terms in
//! the same normalized form.
//!
//! A sub-condition that can match no document (empty analysis, empty `AnyOf`,
//! [`Condition::MatchNone`]) compiles to `None`; an `AllOf` containing such a child
//! is itself unsatisfiable.

use tantivy::{
    Term,
    query::{BooleanQuery, EmptyQuery, Occur, PhraseQuery, Query, TermQuery},
    schema::{Field as TantivyField, IndexRecordOption},
};
use txtdocs_query::{Condition, Field, MatchMode, Operator};

use crate::{analyzer::FieldAnalyzers, schema::IndexSchema};

/// Compiles condition trees into Tantivy queries.
pub struct QueryCompiler<'a> {
    /// Index schema for field references.
    schema: &'a IndexSchema,
    /// Analyzers for turning query text into terms.
    analyzers: FieldAnalyzers,
}

impl<'a> QueryCompiler<'a> {
    /// Creates a new query compiler.
    pub fn new(schema: &'a IndexSchema, analyzers: FieldAnalyzers) -> Self {
        Self { schema, analyzers }
    }

    /// Compiles a condition into a Tantivy query.
    ///
    /// Unsatisfiable conditions become an [`EmptyQuery`].
    pub fn compile(&mut self, condition: &Condition) -> Box<dyn Query> {
        self.compile_node(condition)
            .unwrap_or_else(|| Box::new(EmptyQuery))
    }

    /// Compiles one node, returning `None` when it cannot match anything.
    fn compile_node(&mut self, condition: &Condition) -> Option<Box<dyn Query>> {
        match condition {
            Condition::MatchNone => None,
            Condition::FieldMatch { field, text, mode } => match mode {
                MatchMode::Term => self.compile_field_terms(*field, text),
                MatchMode::Phrase => self.compile_field_phrase(*field, text),
            },
            Condition::MultiFieldMatch {
                fields,
                text,
                operator,
            } => match operator {
                Operator::And => self.compile_multi_field_and(fields, text),
                Operator::Or => self.compile_multi_field_or(fields, text),
            },
            Condition::AnyOf(children) => self.compile_any_of(children),
            Condition::AllOf(children) => self.compile_all_of(children),
        }
    }

    /// Any analyzed token of `text` found in `field` matches.
    fn compile_field_terms(&mut self, field: Field, text: &str) -> Option<Box<dyn Query>> {
        let target = self.schema.field(field);
        let clauses: Vec<_> = self
            .analyzers
            .tokens(field, text)
            .iter()
            .map(|token| (Occur::Should, term_query(target, token)))
            .collect();
        boolean(clauses)
    }

    /// The analyzed tokens of `text` must appear consecutively in `field`.
    fn compile_field_phrase(&mut self, field: Field, text: &str) -> Option<Box<dyn Query>> {
        let target = self.schema.field(field);
        let tokens = self.analyzers.tokens(field, text);
        match tokens.as_slice() {
            [] => None,
            [token] => Some(term_query(target, token)),
            _ => {
                let terms = tokens
                    .iter()
                    .map(|t| Term::from_field_text(target, t))
                    .collect();
                Some(Box::new(PhraseQuery::new(terms)))
            }
        }
    }

    /// Every word of `text` must appear in at least one of `fields`.
    ///
    /// Words that analyze to nothing in every field are ignored.
    fn compile_multi_field_and(&mut self, fields: &[Field], text: &str) -> Option<Box<dyn Query>> {
        let mut clauses = Vec::new();
        for word in self.analyzers.words(text) {
            let alternatives = self.word_alternatives(fields, &word);
            if let Some(query) = boolean(alternatives) {
                clauses.push((Occur::Must, query));
            }
        }
        boolean(clauses)
    }

    /// Any word of `text` found in any of `fields` matches.
    fn compile_multi_field_or(&mut self, fields: &[Field], text: &str) -> Option<Box<dyn Query>> {
        let mut clauses = Vec::new();
        for word in self.analyzers.words(text) {
            clauses.extend(self.word_alternatives(fields, &word));
        }
        boolean(clauses)
    }

    /// SHOULD clauses matching `word` in each of `fields`.
    fn word_alternatives(
        &mut self,
        fields: &[Field],
        word: &str,
    ) -> Vec<(Occur, Box<dyn Query>)> {
        let mut clauses = Vec::new();
        for &field in fields {
            let target = self.schema.field(field);
            for token in self.analyzers.tokens(field, word) {
                clauses.push((Occur::Should, term_query(target, &token)));
            }
        }
        clauses
    }

    /// At least one satisfiable child must match.
    fn compile_any_of(&mut self, children: &[Condition]) -> Option<Box<dyn Query>> {
        let clauses = children
            .iter()
            .filter_map(|child| self.compile_node(child))
            .map(|query| (Occur::Should, query))
            .collect();
        boolean(clauses)
    }

    /// Every child must match; one unsatisfiable child makes the whole node unsatisfiable.
    fn compile_all_of(&mut self, children: &[Condition]) -> Option<Box<dyn Query>> {
        let mut clauses = Vec::with_capacity(children.len());
        for child in children {
            clauses.push((Occur::Must, self.compile_node(child)?));
        }
        boolean(clauses)
    }
}

/// Builds a scoring term query.
fn term_query(field: TantivyField, token: &str) -> Box<dyn Query> {
    Box::new(TermQuery::new(
        Term::from_field_text(field, token),
        IndexRecordOption::WithFreqs,
    ))
}

/// Wraps clauses in a boolean query, or `None` when there are none.
fn boolean(clauses: Vec<(Occur, Box<dyn Query>)>) -> Option<Box<dyn Query>> {
    if clauses.is_empty() {
        None
    } else {
        Some(Box::new(BooleanQuery::new(clauses)))
    }
}
