//! Adapter from the sqlparser tokenizer onto the grammar's token-id space.
//!
//! Whitespace and comments are kept in the stream on the hidden channel; the
//! scanner and the qualifier analysis are defined over a stream that still
//! contains them. A synthetic EOF token is appended so cursor movement can
//! clamp instead of fail.

use sqlparser::dialect::MySqlDialect;
use sqlparser::tokenizer::{Token, TokenWithSpan, Tokenizer, Whitespace};

use crate::error::CompletionError;
use crate::types::QueryType;
use crate::vocab::{token, TokenId, Vocabulary};

/// Channel a token lives on. Hidden tokens are kept in the stream but do not
/// participate in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Default,
    Hidden,
}

/// One token of the pre-tokenized input.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub token_type: TokenId,
    /// Token text with identifier quotes already removed.
    pub text: String,
    pub channel: Channel,
    /// 1-based source line of the first character.
    pub line: usize,
    /// 0-based source column of the first character.
    pub column: usize,
}

fn classify(token: &Token) -> (TokenId, Channel, Option<String>) {
    let vocab = Vocabulary::instance();
    match token {
        Token::Word(word) => {
            if word.quote_style == Some('`') {
                (token::BACK_TICK_QUOTED_ID, Channel::Default, Some(word.value.clone()))
            } else if word.quote_style.is_some() {
                (token::DOUBLE_QUOTED_TEXT, Channel::Default, Some(word.value.clone()))
            } else {
                match vocab.keyword_token(&word.value) {
                    Some(id) => (id, Channel::Default, Some(word.value.clone())),
                    None => (token::IDENTIFIER, Channel::Default, Some(word.value.clone())),
                }
            }
        }
        Token::Number(text, _) => {
            let id = if text.contains('.') || text.contains('e') || text.contains('E') {
                token::DECIMAL_NUMBER
            } else {
                token::INT_NUMBER
            };
            (id, Channel::Default, Some(text.clone()))
        }
        Token::SingleQuotedString(text) | Token::NationalStringLiteral(text) => {
            (token::SINGLE_QUOTED_TEXT, Channel::Default, Some(text.clone()))
        }
        Token::DoubleQuotedString(text) => {
            (token::DOUBLE_QUOTED_TEXT, Channel::Default, Some(text.clone()))
        }
        Token::HexStringLiteral(text) => {
            (token::HEX_NUMBER, Channel::Default, Some(text.clone()))
        }
        Token::Whitespace(ws) => match ws {
            Whitespace::SingleLineComment { comment, .. } => {
                (token::LINE_COMMENT, Channel::Hidden, Some(comment.clone()))
            }
            Whitespace::MultiLineComment(comment) => {
                (token::BLOCK_COMMENT, Channel::Hidden, Some(comment.clone()))
            }
            _ => (token::WHITESPACE, Channel::Hidden, None),
        },
        Token::Placeholder(text) => (token::PARAM_MARKER, Channel::Default, Some(text.clone())),
        Token::Comma => (token::COMMA_SYMBOL, Channel::Default, None),
        Token::Period => (token::DOT_SYMBOL, Channel::Default, None),
        Token::SemiColon => (token::SEMICOLON_SYMBOL, Channel::Default, None),
        Token::Colon => (token::COLON_SYMBOL, Channel::Default, None),
        Token::LParen => (token::OPEN_PAR_SYMBOL, Channel::Default, None),
        Token::RParen => (token::CLOSE_PAR_SYMBOL, Channel::Default, None),
        Token::LBrace => (token::OPEN_CURLY_SYMBOL, Channel::Default, None),
        Token::RBrace => (token::CLOSE_CURLY_SYMBOL, Channel::Default, None),
        Token::Eq => (token::EQUAL_OPERATOR, Channel::Default, None),
        Token::Neq => (token::NOT_EQUAL_OPERATOR, Channel::Default, None),
        Token::Lt => (token::LESS_THAN_OPERATOR, Channel::Default, None),
        Token::Gt => (token::GREATER_THAN_OPERATOR, Channel::Default, None),
        Token::LtEq => (token::LESS_OR_EQUAL_OPERATOR, Channel::Default, None),
        Token::GtEq => (token::GREATER_OR_EQUAL_OPERATOR, Channel::Default, None),
        Token::Plus => (token::PLUS_OPERATOR, Channel::Default, None),
        Token::Minus => (token::MINUS_OPERATOR, Channel::Default, None),
        Token::Mul => (token::MULT_OPERATOR, Channel::Default, None),
        Token::Div => (token::DIV_OPERATOR, Channel::Default, None),
        Token::Mod => (token::MOD_OPERATOR, Channel::Default, None),
        Token::StringConcat => (token::CONCAT_PIPES_SYMBOL, Channel::Default, None),
        Token::Ampersand => (token::BITWISE_AND_OPERATOR, Channel::Default, None),
        Token::Pipe => (token::BITWISE_OR_OPERATOR, Channel::Default, None),
        Token::Caret => (token::BITWISE_XOR_OPERATOR, Channel::Default, None),
        Token::Tilde => (token::BITWISE_NOT_OPERATOR, Channel::Default, None),
        _ => (token::OTHER, Channel::Default, None),
    }
}

/// Tokenizes SQL source into the grammar's token stream, EOF appended.
pub fn tokenize(sql: &str) -> Result<Vec<TokenInfo>, CompletionError> {
    let dialect = MySqlDialect {};
    let mut tokenizer = Tokenizer::new(&dialect, sql);
    let raw: Vec<TokenWithSpan> = tokenizer.tokenize_with_location()?;

    let mut tokens = Vec::with_capacity(raw.len() + 1);
    let mut end_line = 1usize;
    let mut end_column = 0usize;

    for item in &raw {
        let (token_type, channel, text) = classify(&item.token);
        let text = text.unwrap_or_else(|| item.token.to_string());
        tokens.push(TokenInfo {
            token_type,
            text,
            channel,
            line: item.span.start.line as usize,
            column: (item.span.start.column as usize).saturating_sub(1),
        });
        end_line = item.span.end.line as usize;
        end_column = (item.span.end.column as usize).saturating_sub(1);
    }

    tokens.push(TokenInfo {
        token_type: token::EOF,
        text: String::new(),
        channel: Channel::Default,
        line: end_line,
        column: end_column,
    });

    Ok(tokens)
}

/// Classifies the statement from its leading tokens. `CREATE` statements are
/// resolved by scanning a bounded window so clauses like `DEFINER = x` do not
/// hide the object keyword.
pub fn determine_query_type(tokens: &[TokenInfo]) -> QueryType {
    let mut significant = tokens
        .iter()
        .filter(|t| t.channel == Channel::Default && t.token_type != token::EOF);

    let first = match significant.next() {
        Some(first) => first,
        None => return QueryType::Unknown,
    };

    match first.token_type {
        token::SELECT_SYMBOL => QueryType::Select,
        token::INSERT_SYMBOL | token::REPLACE_SYMBOL => QueryType::Insert,
        token::UPDATE_SYMBOL => QueryType::Update,
        token::DELETE_SYMBOL => QueryType::Delete,
        token::CREATE_SYMBOL => {
            for follower in significant.take(8) {
                match follower.token_type {
                    token::TRIGGER_SYMBOL => return QueryType::CreateTrigger,
                    token::TABLE_SYMBOL => return QueryType::CreateTable,
                    token::VIEW_SYMBOL => return QueryType::CreateView,
                    token::PROCEDURE_SYMBOL | token::FUNCTION_SYMBOL => {
                        return QueryType::CreateRoutine
                    }
                    token::EVENT_SYMBOL => return QueryType::CreateEvent,
                    token::DATABASE_SYMBOL => return QueryType::CreateSchema,
                    _ => {}
                }
            }
            QueryType::Unknown
        }
        _ => QueryType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_and_identifiers_are_classified() {
        let tokens = tokenize("SELECT a FROM t1").unwrap();
        let types: Vec<TokenId> = tokens
            .iter()
            .filter(|t| t.channel == Channel::Default)
            .map(|t| t.token_type)
            .collect();
        assert_eq!(
            types,
            vec![
                token::SELECT_SYMBOL,
                token::IDENTIFIER,
                token::FROM_SYMBOL,
                token::IDENTIFIER,
                token::EOF,
            ]
        );
    }

    #[test]
    fn whitespace_and_comments_are_hidden() {
        let tokens = tokenize("SELECT -- pick\n a").unwrap();
        assert!(tokens
            .iter()
            .any(|t| t.token_type == token::LINE_COMMENT && t.channel == Channel::Hidden));
        assert!(tokens
            .iter()
            .any(|t| t.token_type == token::WHITESPACE && t.channel == Channel::Hidden));
    }

    #[test]
    fn backtick_identifiers_keep_unquoted_text() {
        let tokens = tokenize("SELECT `my col` FROM `t 1`").unwrap();
        let quoted: Vec<&TokenInfo> = tokens
            .iter()
            .filter(|t| t.token_type == token::BACK_TICK_QUOTED_ID)
            .collect();
        assert_eq!(quoted.len(), 2);
        assert_eq!(quoted[0].text, "my col");
        assert_eq!(quoted[1].text, "t 1");
    }

    #[test]
    fn positions_are_line_one_based_column_zero_based() {
        let tokens = tokenize("SELECT a\nFROM t1").unwrap();
        let from = tokens
            .iter()
            .find(|t| t.token_type == token::FROM_SYMBOL)
            .unwrap();
        assert_eq!(from.line, 2);
        assert_eq!(from.column, 0);
    }

    #[test]
    fn eof_is_appended() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, token::EOF);
    }

    #[test]
    fn query_type_detection() {
        let cases = [
            ("SELECT 1", QueryType::Select),
            ("INSERT INTO t VALUES (1)", QueryType::Insert),
            ("UPDATE t SET a = 1", QueryType::Update),
            ("DELETE FROM t", QueryType::Delete),
            ("CREATE TABLE t (a INT)", QueryType::CreateTable),
            ("CREATE TRIGGER tr BEFORE INSERT ON t1", QueryType::CreateTrigger),
            ("CREATE DEFINER = admin TRIGGER tr", QueryType::CreateTrigger),
            ("CREATE VIEW v AS SELECT 1", QueryType::CreateView),
            ("CREATE EVENT e ON SCHEDULE", QueryType::CreateEvent),
            ("GRANT ALL ON t", QueryType::Unknown),
        ];
        for (sql, expected) in cases {
            let tokens = tokenize(sql).unwrap();
            assert_eq!(determine_query_type(&tokens), expected, "{sql}");
        }
    }
}
