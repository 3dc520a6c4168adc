//! Parser façade handed to the completion entry point.
//!
//! Bundles the tokenized input, the grammar vocabulary and the external
//! candidate engine; one instance serves one completion invocation.

use crate::completion::candidates::CandidateEngine;
use crate::error::CompletionError;
use crate::lexer::{self, TokenInfo};
use crate::types::{CompletionOptions, QueryType};
use crate::vocab::Vocabulary;

pub struct SqlParser<'a> {
    tokens: Vec<TokenInfo>,
    engine: &'a dyn CandidateEngine,
    query_type: QueryType,
    options: CompletionOptions,
}

impl<'a> SqlParser<'a> {
    pub fn new(sql: &str, engine: &'a dyn CandidateEngine) -> Result<Self, CompletionError> {
        Self::with_options(sql, engine, CompletionOptions::default())
    }

    pub fn with_options(
        sql: &str,
        engine: &'a dyn CandidateEngine,
        options: CompletionOptions,
    ) -> Result<Self, CompletionError> {
        let tokens = lexer::tokenize(sql)?;
        let query_type = lexer::determine_query_type(&tokens);
        Ok(Self {
            tokens,
            engine,
            query_type,
            options,
        })
    }

    pub fn tokens(&self) -> &[TokenInfo] {
        &self.tokens
    }

    pub fn vocabulary(&self) -> &'static Vocabulary {
        Vocabulary::instance()
    }

    pub fn query_type(&self) -> QueryType {
        self.query_type
    }

    pub fn options(&self) -> CompletionOptions {
        self.options
    }

    pub(crate) fn engine(&self) -> &'a dyn CandidateEngine {
        self.engine
    }
}
