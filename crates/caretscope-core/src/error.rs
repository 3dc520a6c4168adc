//! Error type for the completion pipeline.
//!
//! The public entry point is fail-soft and never surfaces these errors to
//! callers directly; they exist for the seams where something genuinely went
//! wrong (lexing the input, or the external candidate engine giving up) and
//! are logged before an empty result is returned.

use std::fmt;

/// Category of a completion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionErrorKind {
    /// The input could not be tokenized.
    #[default]
    Tokenize,
    /// The candidate engine failed (e.g. corrupted parser state).
    Engine,
}

#[derive(Debug, Clone)]
pub struct CompletionError {
    pub message: String,
    pub kind: CompletionErrorKind,
}

impl CompletionError {
    pub fn tokenize(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: CompletionErrorKind::Tokenize,
        }
    }

    pub fn engine(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: CompletionErrorKind::Engine,
        }
    }
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CompletionErrorKind::Tokenize => write!(f, "tokenize error: {}", self.message),
            CompletionErrorKind::Engine => {
                write!(f, "candidate engine error: {}", self.message)
            }
        }
    }
}

impl std::error::Error for CompletionError {}

impl From<sqlparser::tokenizer::TokenizerError> for CompletionError {
    fn from(err: sqlparser::tokenizer::TokenizerError) -> Self {
        CompletionError::tokenize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_kind() {
        let err = CompletionError::engine("state corrupted");
        assert_eq!(err.to_string(), "candidate engine error: state corrupted");
        let err = CompletionError::tokenize("unterminated string");
        assert_eq!(err.to_string(), "tokenize error: unterminated string");
    }

    #[test]
    fn error_trait() {
        let err = CompletionError::engine("boom");
        let _: &dyn std::error::Error = &err;
    }
}
