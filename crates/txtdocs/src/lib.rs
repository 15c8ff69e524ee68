//! txtdocs: search a folder of plain-text files by name and content.
//!
//! `txtdocs index <dir>` builds an on-disk index of the `.txt` files in a directory;
//! `txtdocs` then reads queries interactively and prints ranked matches. Queries use a
//! small language of terms, quoted phrases, and `name:`/`content:` field prefixes, all
//! of which must match.

#![warn(missing_docs)]

pub mod cli;
