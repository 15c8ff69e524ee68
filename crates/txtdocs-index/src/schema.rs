//! Index schema definition for the txtdocs index.
//!
//! One Tantivy document per source file:
//! - `path`: Absolute file path, the document identifier (raw string, stored)
//! - `name`: File name including extension (text, stored)
//! - `content`: Full file text (text, not stored)

use tantivy::schema::{
    Field as TantivyField, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing,
    TextOptions,
};
use txtdocs_query::Field;

use crate::analyzer::{CONTENT_TOKENIZER, NAME_TOKENIZER};

/// Handles to all fields in the index schema.
#[derive(Debug, Clone)]
pub struct IndexSchema {
    /// The underlying Tantivy schema.
    schema: Schema,
    /// Absolute path of the source file.
    pub path: TantivyField,
    /// File name.
    pub name: TantivyField,
    /// File content.
    pub content: TantivyField,
}

impl IndexSchema {
    /// Creates a new index schema with all fields configured.
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        // Indexed as a single token so re-submitting a path can delete the old copy
        let path = builder.add_text_field("path", STRING | STORED);

        let name_options = TextOptions::default()
            .set_indexing_options(
                TextFieldIndexing::default()
                    .set_tokenizer(NAME_TOKENIZER)
                    .set_index_option(IndexRecordOption::WithFreqsAndPositions),
            )
            .set_stored();
        let name = builder.add_text_field("name", name_options);

        let content_options = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(CONTENT_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );
        let content = builder.add_text_field("content", content_options);

        let schema = builder.build();

        Self {
            schema,
            path,
            name,
            content,
        }
    }

    /// Returns a reference to the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the Tantivy field backing a query field.
    pub fn field(&self, field: Field) -> TantivyField {
        match field {
            Field::Name => self.name,
            Field::Content => self.content,
        }
    }
}

impl Default for IndexSchema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use tantivy::schema::FieldType;

    use super::*;

    #[test]
    fn schema_has_all_fields() {
        let schema = IndexSchema::new();
        let tantivy_schema = schema.schema();

        assert!(tantivy_schema.get_field("path").is_ok());
        assert!(tantivy_schema.get_field("name").is_ok());
        assert!(tantivy_schema.get_field("content").is_ok());
    }

    #[test]
    fn path_field_is_raw_and_stored() {
        let schema = IndexSchema::new();
        let entry = schema.schema().get_field_entry(schema.path);

        assert!(entry.is_indexed());
        assert!(entry.is_stored());

        if let FieldType::Str(opts) = entry.field_type() {
            let indexing = opts.get_indexing_options().unwrap();
            assert_eq!(indexing.tokenizer(), "raw");
        } else {
            panic!("path field should be text type");
        }
    }

    #[test]
    fn text_fields_use_their_own_tokenizers() {
        let schema = IndexSchema::new();

        for (field, tokenizer) in [(Field::Name, NAME_TOKENIZER), (Field::Content, CONTENT_TOKENIZER)] {
            let entry = schema.schema().get_field_entry(schema.field(field));
            assert!(entry.is_indexed(), "{field} should be indexed");

            if let FieldType::Str(opts) = entry.field_type() {
                let indexing = opts.get_indexing_options().unwrap();
                assert_eq!(indexing.tokenizer(), tokenizer);
                assert_eq!(
                    indexing.index_option(),
                    IndexRecordOption::WithFreqsAndPositions
                );
            } else {
                panic!("{field} field should be text type");
            }
        }
    }

    #[test]
    fn content_not_stored() {
        let schema = IndexSchema::new();
        assert!(schema.schema().get_field_entry(schema.name).is_stored());
        assert!(!schema.schema().get_field_entry(schema.content).is_stored());
    }
}
