//! Query lexer (tokenizer).
//!
//! Scans a query string left to right and yields one [`RawMatch`] per
//! recognized phrase or term. At each position the lexer tries, in order:
//!
//! 1. a phrase: optional prefix, then `"text"` with at least one character;
//! 2. a term: optional prefix, then a run of non-whitespace, non-quote characters.
//!
//! The optional prefix is tried as `name:` / `content:` first, then a bare `:`,
//! then nothing. Characters that start neither alternative (a lone `"`, an
//! empty `""`) are skipped. Lexing never fails.

use std::{iter::FusedIterator, ops::Range};

use crate::field::Field;

/// Quote character delimiting phrases.
const QUOTE: char = '"';

/// A phrase or term recognized in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Field named by the token's prefix, if any.
    pub field: Option<Field>,
    /// Phrase or term text. Never empty.
    pub text: String,
    /// True if the text came from a quoted phrase.
    pub is_phrase: bool,
    /// Byte range of the whole token in the input, prefix included.
    pub span: Range<usize>,
}

/// Iterator over the matches in a query string.
pub struct Lexer<'a> {
    /// The input string being scanned.
    input: &'a str,
    /// Current byte position in input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Advances past whitespace.
    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    /// Advances past one character.
    fn skip_char(&mut self) {
        if let Some(ch) = self.input[self.position..].chars().next() {
            self.position += ch.len_utf8();
        }
    }

    /// Tries both alternatives at the current position.
    fn match_here(&self) -> Option<RawMatch> {
        let rest = &self.input[self.position..];
        let candidates = prefix_candidates(rest);

        let phrase = candidates.iter().find_map(|&(field, len)| {
            read_phrase(&rest[len..]).map(|(text, consumed)| (field, len, text, consumed, true))
        });
        let found = phrase.or_else(|| {
            candidates.iter().find_map(|&(field, len)| {
                read_term(&rest[len..]).map(|(text, consumed)| (field, len, text, consumed, false))
            })
        });

        found.map(|(field, prefix_len, text, consumed, is_phrase)| {
            let end = self.position + prefix_len + consumed;
            RawMatch {
                field,
                text: text.to_string(),
                is_phrase,
                span: self.position..end,
            }
        })
    }
}

impl Iterator for Lexer<'_> {
    type Item = RawMatch;

    fn next(&mut self) -> Option<RawMatch> {
        loop {
            self.skip_whitespace();
            if self.position >= self.input.len() {
                return None;
            }
            match self.match_here() {
                Some(raw) => {
                    self.position = raw.span.end;
                    return Some(raw);
                }
                None => self.skip_char(),
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Returns the prefixes to try at the start of `rest`, most specific first.
///
/// Each entry is the scoped field (if any) and the prefix length in bytes.
/// The empty prefix is always last.
fn prefix_candidates(rest: &str) -> Vec<(Option<Field>, usize)> {
    let mut candidates = Vec::with_capacity(2);
    if let Some((field, len)) = Field::strip_prefix(rest) {
        candidates.push((Some(field), len));
    } else if rest.starts_with(':') {
        candidates.push((None, 1));
    }
    candidates.push((None, 0));
    candidates
}

/// Reads a closed, non-empty quoted phrase at the start of `body`.
///
/// Returns the text between the quotes and the bytes consumed, quotes included.
fn read_phrase(body: &str) -> Option<(&str, usize)> {
    let inner = body.strip_prefix(QUOTE)?;
    let close = inner.find(QUOTE)?;
    if close == 0 {
        return None;
    }
    Some((&inner[..close], close + 2))
}

/// Reads a run of non-whitespace, non-quote characters at the start of `body`.
fn read_term(body: &str) -> Option<(&str, usize)> {
    let len = body
        .find(|c: char| c.is_whitespace() || c == QUOTE)
        .unwrap_or(body.len());
    (len > 0).then(|| (&body[..len], len))
}

/// Tokenizes a query string into raw matches, in source order.
pub fn tokenize(input: &str) -> Vec<RawMatch> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Strips spans so tests can compare field, text and kind only.
    fn lex(input: &str) -> Vec<(Option<Field>, String, bool)> {
        tokenize(input)
            .into_iter()
            .map(|m| (m.field, m.text, m.is_phrase))
            .collect()
    }

    fn term(field: Option<Field>, text: &str) -> (Option<Field>, String, bool) {
        (field, text.to_string(), false)
    }

    fn phrase(field: Option<Field>, text: &str) -> (Option<Field>, String, bool) {
        (field, text.to_string(), true)
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn whitespace_only() {
        assert!(tokenize(" \t \n ").is_empty());
    }

    #[test]
    fn single_term() {
        assert_eq!(lex("tfidf"), vec![term(None, "tfidf")]);
    }

    #[test]
    fn multiple_terms() {
        assert_eq!(
            lex("tfidf inversa"),
            vec![term(None, "tfidf"), term(None, "inversa")]
        );
    }

    #[test]
    fn field_term() {
        assert_eq!(lex("name:guida"), vec![term(Some(Field::Name), "guida")]);
    }

    #[test]
    fn field_phrase() {
        assert_eq!(
            lex("content:\"rete neurale\""),
            vec![phrase(Some(Field::Content), "rete neurale")]
        );
    }

    #[test]
    fn unscoped_phrase() {
        assert_eq!(
            lex("\"rete neurale\""),
            vec![phrase(None, "rete neurale")]
        );
    }

    #[test]
    fn mixed_query_keeps_source_order() {
        assert_eq!(
            lex("name:guida content:\"rete neurale\" tfidf"),
            vec![
                term(Some(Field::Name), "guida"),
                phrase(Some(Field::Content), "rete neurale"),
                term(None, "tfidf"),
            ]
        );
    }

    #[test]
    fn unknown_prefix_folds_into_text() {
        assert_eq!(lex("foo:bar"), vec![term(None, "foo:bar")]);
        assert_eq!(lex("title:\"x y\""), vec![term(None, "title:"), phrase(None, "x y")]);
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert_eq!(lex("Name:guida"), vec![term(None, "Name:guida")]);
    }

    #[test]
    fn prefix_requires_colon() {
        assert_eq!(lex("nameguida"), vec![term(None, "nameguida")]);
    }

    #[test]
    fn colons_after_prefix_belong_to_text() {
        assert_eq!(lex("name:foo:bar"), vec![term(Some(Field::Name), "foo:bar")]);
        assert_eq!(
            lex("content:name:x"),
            vec![term(Some(Field::Content), "name:x")]
        );
    }

    #[test]
    fn stray_leading_colon_is_absorbed() {
        assert_eq!(lex(":foo"), vec![term(None, "foo")]);
        assert_eq!(lex(":\"a b\""), vec![phrase(None, "a b")]);
        assert_eq!(lex("::foo"), vec![term(None, ":foo")]);
    }

    #[test]
    fn quote_ends_a_term() {
        assert_eq!(lex("ab\"cd\""), vec![term(None, "ab"), phrase(None, "cd")]);
    }

    #[test]
    fn empty_phrase_is_dropped() {
        assert!(tokenize("\"\"").is_empty());
        assert_eq!(lex("name:\"\" x"), vec![term(None, "name:"), term(None, "x")]);
    }

    #[test]
    fn lone_quote_is_skipped() {
        assert_eq!(lex("\" guida"), vec![term(None, "guida")]);
    }

    #[test]
    fn unterminated_field_phrase_falls_back_to_terms() {
        // The prefix cannot scope anything, so it becomes plain text; the lone
        // quote is skipped and the rest lexes as an unscoped term.
        assert_eq!(
            lex("name:\"abc"),
            vec![term(None, "name:"), term(None, "abc")]
        );
    }

    #[test]
    fn unterminated_phrase_splits_on_whitespace() {
        assert_eq!(
            lex("\"rete neurale"),
            vec![term(None, "rete"), term(None, "neurale")]
        );
    }

    #[test]
    fn dangling_prefix_is_a_term() {
        assert_eq!(lex("name:"), vec![term(None, "name:")]);
        assert_eq!(lex("name: foo"), vec![term(None, "name:"), term(None, "foo")]);
    }

    #[test]
    fn phrase_keeps_inner_whitespace_and_punctuation() {
        assert_eq!(
            lex("\"  a,  b \""),
            vec![phrase(None, "  a,  b ")]
        );
    }

    #[test]
    fn spans_cover_tokens() {
        let input = "name:guida  \"rete neurale\" x";
        let spans: Vec<_> = tokenize(input)
            .into_iter()
            .map(|m| &input[m.span])
            .collect();
        assert_eq!(spans, vec!["name:guida", "\"rete neurale\"", "x"]);
    }

    #[test]
    fn non_ascii_text() {
        assert_eq!(
            lex("città content:\"perché sì\" «x»"),
            vec![
                term(None, "città"),
                phrase(Some(Field::Content), "perché sì"),
                term(None, "«x»"),
            ]
        );
    }

    #[test]
    fn unicode_whitespace_separates_terms() {
        assert_eq!(lex("a\u{00a0}b"), vec![term(None, "a"), term(None, "b")]);
    }
}
