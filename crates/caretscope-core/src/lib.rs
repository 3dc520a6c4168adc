//! Context-aware auto-completion for SQL source text at a caret position.
//!
//! Given a partially typed statement, the caret's line/column, the default
//! schema and a cache of object names, [`get_code_completion_list`] returns a
//! ranked, deduplicated list of entries (keywords, database objects,
//! functions) that are grammatically valid at that caret.
//!
//! The SQL grammar itself, the ATN-based candidate engine and the name cache
//! are external collaborators; they enter through the [`CandidateEngine`]
//! and [`ObjectNamesCache`] traits. Everything grammar-specific is gathered
//! in the [`vocab`] module and the [`GrammarConfig`] descriptor.

pub mod cache;
pub mod completion;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod scanner;
pub mod types;
pub mod vocab;

pub use cache::ObjectNamesCache;
pub use completion::candidates::{
    mysql_grammar, CandidateEngine, CandidatesCollection, GrammarConfig, ProposalRule,
};
pub use completion::get_code_completion_list;
pub use completion::qualifier::{determine_qualifier, determine_schema_table_qualifier};
pub use completion::references::{collect_references, ReferenceStack};
pub use completion::set::CompletionSet;
pub use error::{CompletionError, CompletionErrorKind};
pub use parser::SqlParser;
pub use scanner::Scanner;
pub use types::{
    CompletionEntry, CompletionKind, CompletionOptions, ObjectFlags, QueryType, TableReference,
};
pub use vocab::{Vocabulary, KEYWORD_SYNONYMS};
