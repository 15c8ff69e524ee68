//! Text analysis pipelines for the txtdocs index.
//!
//! Two analyzers are registered with Tantivy:
//!
//! - [`NAME_TOKENIZER`] for file names: split on punctuation and whitespace, lowercase,
//!   fold accented characters to ASCII, so `Guida_Rapida.txt` matches `guida` and `rapida`.
//! - [`CONTENT_TOKENIZER`] for document text: split, lowercase, drop tokens longer than
//!   40 bytes, then stem with the configured language.
//!
//! Query text is analyzed with the analyzer of the field it is matched against.

use tantivy::{
    Index,
    tokenizer::{
        AsciiFoldingFilter, Language, LowerCaser, RemoveLongFilter, SimpleTokenizer, Stemmer,
        TextAnalyzer, TokenStream,
    },
};
use txtdocs_query::Field;

use crate::IndexError;

/// Name of the tokenizer registered for the `name` field.
pub const NAME_TOKENIZER: &str = "txtdocs_name";

/// Name of the tokenizer registered for the `content` field.
pub const CONTENT_TOKENIZER: &str = "txtdocs_content";

/// Maximum token length in bytes before filtering.
const MAX_TOKEN_LENGTH: usize = 40;

/// Parses a stemmer language string into a Tantivy `Language`.
///
/// Supports lowercase language names matching Tantivy's `Language` enum.
pub fn parse_language(name: &str) -> Result<Language, IndexError> {
    match name.to_lowercase().as_str() {
        "arabic" => Ok(Language::Arabic),
        "danish" => Ok(Language::Danish),
        "dutch" => Ok(Language::Dutch),
        "english" => Ok(Language::English),
        "finnish" => Ok(Language::Finnish),
        "french" => Ok(Language::French),
        "german" => Ok(Language::German),
        "greek" => Ok(Language::Greek),
        "hungarian" => Ok(Language::Hungarian),
        "italian" => Ok(Language::Italian),
        "norwegian" => Ok(Language::Norwegian),
        "portuguese" => Ok(Language::Portuguese),
        "romanian" => Ok(Language::Romanian),
        "russian" => Ok(Language::Russian),
        "spanish" => Ok(Language::Spanish),
        "swedish" => Ok(Language::Swedish),
        "tamil" => Ok(Language::Tamil),
        "turkish" => Ok(Language::Turkish),
        other => Err(IndexError::InvalidLanguage(other.to_string())),
    }
}

/// Builds the file name analyzer.
pub fn build_name_analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(AsciiFoldingFilter)
        .build()
}

/// Builds the content analyzer with the specified stemmer language.
pub fn build_content_analyzer(language: Language) -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH))
        .filter(Stemmer::new(language))
        .build()
}

/// Splits text into raw words, without normalization.
///
/// Uses the same tokenizer as both field analyzers, so each word yields at most one
/// token per field.
pub fn build_word_splitter() -> TextAnalyzer {
    TextAnalyzer::from(SimpleTokenizer::default())
}

/// Registers both field analyzers on an index.
pub fn register_analyzers(index: &Index, stemmer: &str) -> Result<(), IndexError> {
    let language = parse_language(stemmer)?;
    let tokenizers = index.tokenizers();
    tokenizers.register(NAME_TOKENIZER, build_name_analyzer());
    tokenizers.register(CONTENT_TOKENIZER, build_content_analyzer(language));
    Ok(())
}

/// Per-field analyzers used to turn query text into index terms.
#[derive(Clone)]
pub struct FieldAnalyzers {
    /// Analyzer for the `name` field.
    name: TextAnalyzer,
    /// Analyzer for the `content` field.
    content: TextAnalyzer,
    /// Raw word splitter.
    words: TextAnalyzer,
}

impl FieldAnalyzers {
    /// Creates analyzers matching an index built with the given stemmer language.
    pub fn new(stemmer: &str) -> Result<Self, IndexError> {
        let language = parse_language(stemmer)?;
        Ok(Self {
            name: build_name_analyzer(),
            content: build_content_analyzer(language),
            words: build_word_splitter(),
        })
    }

    /// Analyzes text with the analyzer of `field`.
    pub fn tokens(&mut self, field: Field, text: &str) -> Vec<String> {
        let analyzer = match field {
            Field::Name => &mut self.name,
            Field::Content => &mut self.content,
        };
        collect_tokens(analyzer, text)
    }

    /// Splits text into raw words.
    pub fn words(&mut self, text: &str) -> Vec<String> {
        collect_tokens(&mut self.words, text)
    }
}

/// Runs an analyzer over text and collects the token texts.
fn collect_tokens(analyzer: &mut TextAnalyzer, text: &str) -> Vec<String> {
    let mut stream = analyzer.token_stream(text);
    let mut tokens = Vec::new();
    while let Some(token) = stream.next() {
        tokens.push(token.text.clone());
    }
    tokens
}
