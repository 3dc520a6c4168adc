//! Candidate collection at the caret.
//!
//! The actual next-token/next-rule computation is done by an external,
//! grammar-agnostic engine working on the parser's ATN; this module owns its
//! configuration (which tokens to suppress, which rules to prefer over their
//! constituent tokens) and post-processes what it reports.

use std::collections::BTreeMap;

use crate::error::CompletionError;
use crate::lexer::TokenInfo;
use crate::parser::SqlParser;
use crate::scanner::Scanner;
use crate::types::TableReference;
use crate::vocab::{token, TokenId};

use super::references;

/// Grammar rules whose activation at the caret is reported as a semantic
/// completion class instead of their constituent tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProposalRule {
    SchemaRef,
    TableRef,
    TableRefWithWildcard,
    FilterTableRef,
    TableRefNoDb,
    ColumnRef,
    ColumnInternalRef,
    TableWild,
    FunctionRef,
    FunctionCall,
    RuntimeFunctionCall,
    TriggerRef,
    ViewRef,
    ProcedureRef,
    LogfileGroupRef,
    TablespaceRef,
    EngineRef,
    CollationName,
    CharsetName,
    EventRef,
    ServerRef,
    UserVariable,
    SystemVariable,
    LabelRef,
    // Reported for better engine behavior, ignored by the assembler.
    ParameterName,
    ProcedureName,
    Identifier,
    LabelIdentifier,
}

/// What the candidate engine found to be valid at the caret.
///
/// `tokens` maps each possible next token to its follow-up tokens (a leading
/// `(` marks a function call); `rules` maps each matched preferred rule to
/// the rule path it was reached through.
#[derive(Debug, Clone, Default)]
pub struct CandidatesCollection {
    pub tokens: BTreeMap<TokenId, Vec<TokenId>>,
    pub rules: BTreeMap<ProposalRule, Vec<ProposalRule>>,
}

/// Grammar-specific engine configuration. Everything that couples the
/// completion core to the hosted grammar revision is gathered here.
pub struct GrammarConfig {
    /// Tokens never offered as keyword completions.
    pub ignored_tokens: &'static [TokenId],
    /// Rules reported as semantic classes instead of token sets.
    pub preferred_rules: &'static [ProposalRule],
    /// Tokens the engine may emit directly adjacent to an identifier.
    pub no_separator_tokens: &'static [TokenId],
}

static OPERATOR_TOKENS: &[TokenId] = &[
    token::EQUAL_OPERATOR,
    token::ASSIGN_OPERATOR,
    token::NULL_SAFE_EQUAL_OPERATOR,
    token::GREATER_OR_EQUAL_OPERATOR,
    token::GREATER_THAN_OPERATOR,
    token::LESS_OR_EQUAL_OPERATOR,
    token::LESS_THAN_OPERATOR,
    token::NOT_EQUAL_OPERATOR,
    token::PLUS_OPERATOR,
    token::MINUS_OPERATOR,
    token::MULT_OPERATOR,
    token::DIV_OPERATOR,
    token::MOD_OPERATOR,
    token::LOGICAL_NOT_OPERATOR,
    token::BITWISE_NOT_OPERATOR,
    token::SHIFT_LEFT_OPERATOR,
    token::SHIFT_RIGHT_OPERATOR,
    token::LOGICAL_AND_OPERATOR,
    token::BITWISE_AND_OPERATOR,
    token::BITWISE_XOR_OPERATOR,
    token::LOGICAL_OR_OPERATOR,
    token::BITWISE_OR_OPERATOR,
    token::DOT_SYMBOL,
    token::COMMA_SYMBOL,
    token::SEMICOLON_SYMBOL,
    token::COLON_SYMBOL,
    token::OPEN_PAR_SYMBOL,
    token::CLOSE_PAR_SYMBOL,
    token::OPEN_CURLY_SYMBOL,
    token::CLOSE_CURLY_SYMBOL,
    token::PARAM_MARKER,
];

static IGNORED_TOKENS: &[TokenId] = &[
    token::EOF,
    token::EQUAL_OPERATOR,
    token::ASSIGN_OPERATOR,
    token::NULL_SAFE_EQUAL_OPERATOR,
    token::GREATER_OR_EQUAL_OPERATOR,
    token::GREATER_THAN_OPERATOR,
    token::LESS_OR_EQUAL_OPERATOR,
    token::LESS_THAN_OPERATOR,
    token::NOT_EQUAL_OPERATOR,
    token::PLUS_OPERATOR,
    token::MINUS_OPERATOR,
    token::MULT_OPERATOR,
    token::DIV_OPERATOR,
    token::MOD_OPERATOR,
    token::LOGICAL_NOT_OPERATOR,
    token::BITWISE_NOT_OPERATOR,
    token::SHIFT_LEFT_OPERATOR,
    token::SHIFT_RIGHT_OPERATOR,
    token::LOGICAL_AND_OPERATOR,
    token::BITWISE_AND_OPERATOR,
    token::BITWISE_XOR_OPERATOR,
    token::LOGICAL_OR_OPERATOR,
    token::BITWISE_OR_OPERATOR,
    token::DOT_SYMBOL,
    token::COMMA_SYMBOL,
    token::SEMICOLON_SYMBOL,
    token::COLON_SYMBOL,
    token::OPEN_PAR_SYMBOL,
    token::CLOSE_PAR_SYMBOL,
    token::OPEN_CURLY_SYMBOL,
    token::CLOSE_CURLY_SYMBOL,
    token::CONCAT_PIPES_SYMBOL,
    token::PARAM_MARKER,
    token::IDENTIFIER,
    token::BACK_TICK_QUOTED_ID,
    token::DOUBLE_QUOTED_TEXT,
    token::SINGLE_QUOTED_TEXT,
    token::INT_NUMBER,
    token::DECIMAL_NUMBER,
    token::HEX_NUMBER,
];

static PREFERRED_RULES: &[ProposalRule] = &[
    ProposalRule::SchemaRef,
    ProposalRule::TableRef,
    ProposalRule::TableRefWithWildcard,
    ProposalRule::FilterTableRef,
    ProposalRule::TableRefNoDb,
    ProposalRule::ColumnRef,
    ProposalRule::ColumnInternalRef,
    ProposalRule::TableWild,
    ProposalRule::FunctionRef,
    ProposalRule::FunctionCall,
    ProposalRule::RuntimeFunctionCall,
    ProposalRule::TriggerRef,
    ProposalRule::ViewRef,
    ProposalRule::ProcedureRef,
    ProposalRule::LogfileGroupRef,
    ProposalRule::TablespaceRef,
    ProposalRule::EngineRef,
    ProposalRule::CollationName,
    ProposalRule::CharsetName,
    ProposalRule::EventRef,
    ProposalRule::ServerRef,
    ProposalRule::UserVariable,
    ProposalRule::SystemVariable,
    ProposalRule::LabelRef,
    ProposalRule::ParameterName,
    ProposalRule::ProcedureName,
    ProposalRule::Identifier,
    ProposalRule::LabelIdentifier,
];

static MYSQL_GRAMMAR: GrammarConfig = GrammarConfig {
    ignored_tokens: IGNORED_TOKENS,
    preferred_rules: PREFERRED_RULES,
    no_separator_tokens: OPERATOR_TOKENS,
};

/// The engine configuration for the hosted MySQL-style grammar.
pub fn mysql_grammar() -> &'static GrammarConfig {
    &MYSQL_GRAMMAR
}

/// The external candidate-computation engine.
///
/// Given the configured grammar, the token stream and the caret as
/// `(column, line)` with a 1-based line, it reports the token and rule
/// candidates valid at that point.
pub trait CandidateEngine {
    fn collect_candidates(
        &self,
        config: &GrammarConfig,
        tokens: &[TokenInfo],
        caret: (usize, usize),
    ) -> Result<CandidatesCollection, CompletionError>;
}

pub(crate) struct CollectedCandidates {
    pub candidates: CandidatesCollection,
    /// Flat snapshot of the references visible to the caret. Populated only
    /// when a column reference is among the rule candidates.
    pub references: Vec<TableReference>,
}

/// Invokes the engine for the caret (0-based line and column) and
/// post-processes the result.
pub(crate) fn collect(
    parser: &SqlParser<'_>,
    caret_line: usize,
    caret_column: usize,
) -> Result<CollectedCandidates, CompletionError> {
    let mut candidates = parser.engine().collect_candidates(
        mysql_grammar(),
        parser.tokens(),
        (caret_column, caret_line + 1),
    )?;

    // The secondary NOT carries different operator precedence; for
    // completion it is the same word.
    if let Some(follow) = candidates.tokens.remove(&token::NOT2_SYMBOL) {
        candidates.tokens.insert(token::NOT_SYMBOL, follow);
    }

    let mut references = Vec::new();
    if candidates.rules.contains_key(&ProposalRule::ColumnRef) {
        let mut scanner = Scanner::new(parser.tokens());
        scanner.advance_to(caret_line + 1, caret_column);
        let stack = references::collect_references(
            parser.tokens(),
            scanner.token_index(),
            parser.query_type(),
        );
        stack.take_snapshot(
            &mut references,
            parser.options().case_sensitive_identifiers,
        );
    }

    Ok(CollectedCandidates {
        candidates,
        references,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_config_suppresses_literals_and_operators() {
        let config = mysql_grammar();
        assert!(config.ignored_tokens.contains(&token::IDENTIFIER));
        assert!(config.ignored_tokens.contains(&token::INT_NUMBER));
        assert!(config.ignored_tokens.contains(&token::EQUAL_OPERATOR));
        assert!(!config.ignored_tokens.contains(&token::SELECT_SYMBOL));
        assert!(config.no_separator_tokens.contains(&token::DOT_SYMBOL));
        assert!(config.preferred_rules.contains(&ProposalRule::ColumnRef));
    }
}
