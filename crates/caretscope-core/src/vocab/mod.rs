//! Token-id space and vocabulary of the hosted grammar.
//!
//! The completion engine is grammar-agnostic at its seams; everything that is
//! specific to the hosted SQL grammar (token identifiers, display names,
//! which tokens count as identifiers, keyword synonyms) lives here so a
//! grammar revision touches a single module.

mod keywords;

pub use keywords::KEYWORD_SYNONYMS;

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Numeric token identifier, as reported by the lexer and consumed by the
/// candidate engine.
pub type TokenId = u16;

/// Token identifiers. Operators and punctuation first, then literal classes,
/// then the hidden channel, then keywords starting at [`token::KEYWORD_BASE`].
pub mod token {
    use super::TokenId;

    pub const EOF: TokenId = 0;

    pub const EQUAL_OPERATOR: TokenId = 1;
    pub const ASSIGN_OPERATOR: TokenId = 2;
    pub const NULL_SAFE_EQUAL_OPERATOR: TokenId = 3;
    pub const GREATER_OR_EQUAL_OPERATOR: TokenId = 4;
    pub const GREATER_THAN_OPERATOR: TokenId = 5;
    pub const LESS_OR_EQUAL_OPERATOR: TokenId = 6;
    pub const LESS_THAN_OPERATOR: TokenId = 7;
    pub const NOT_EQUAL_OPERATOR: TokenId = 8;
    pub const PLUS_OPERATOR: TokenId = 9;
    pub const MINUS_OPERATOR: TokenId = 10;
    pub const MULT_OPERATOR: TokenId = 11;
    pub const DIV_OPERATOR: TokenId = 12;
    pub const MOD_OPERATOR: TokenId = 13;
    pub const LOGICAL_NOT_OPERATOR: TokenId = 14;
    pub const BITWISE_NOT_OPERATOR: TokenId = 15;
    pub const SHIFT_LEFT_OPERATOR: TokenId = 16;
    pub const SHIFT_RIGHT_OPERATOR: TokenId = 17;
    pub const LOGICAL_AND_OPERATOR: TokenId = 18;
    pub const BITWISE_AND_OPERATOR: TokenId = 19;
    pub const BITWISE_XOR_OPERATOR: TokenId = 20;
    pub const LOGICAL_OR_OPERATOR: TokenId = 21;
    pub const BITWISE_OR_OPERATOR: TokenId = 22;
    pub const DOT_SYMBOL: TokenId = 23;
    pub const COMMA_SYMBOL: TokenId = 24;
    pub const SEMICOLON_SYMBOL: TokenId = 25;
    pub const COLON_SYMBOL: TokenId = 26;
    pub const OPEN_PAR_SYMBOL: TokenId = 27;
    pub const CLOSE_PAR_SYMBOL: TokenId = 28;
    pub const OPEN_CURLY_SYMBOL: TokenId = 29;
    pub const CLOSE_CURLY_SYMBOL: TokenId = 30;
    pub const PARAM_MARKER: TokenId = 31;
    pub const CONCAT_PIPES_SYMBOL: TokenId = 32;

    pub const IDENTIFIER: TokenId = 35;
    pub const BACK_TICK_QUOTED_ID: TokenId = 36;
    pub const DOUBLE_QUOTED_TEXT: TokenId = 37;
    pub const SINGLE_QUOTED_TEXT: TokenId = 38;
    pub const INT_NUMBER: TokenId = 39;
    pub const DECIMAL_NUMBER: TokenId = 40;
    pub const HEX_NUMBER: TokenId = 41;

    pub const WHITESPACE: TokenId = 43;
    pub const LINE_COMMENT: TokenId = 44;
    pub const BLOCK_COMMENT: TokenId = 45;
    pub const OTHER: TokenId = 46;

    pub const KEYWORD_BASE: TokenId = 64;

    pub const SELECT_SYMBOL: TokenId = 64;
    pub const FROM_SYMBOL: TokenId = 65;
    pub const WHERE_SYMBOL: TokenId = 66;
    pub const GROUP_SYMBOL: TokenId = 67;
    pub const BY_SYMBOL: TokenId = 68;
    pub const HAVING_SYMBOL: TokenId = 69;
    pub const ORDER_SYMBOL: TokenId = 70;
    pub const LIMIT_SYMBOL: TokenId = 71;
    pub const UNION_SYMBOL: TokenId = 72;
    pub const JOIN_SYMBOL: TokenId = 73;
    pub const INNER_SYMBOL: TokenId = 74;
    pub const LEFT_SYMBOL: TokenId = 75;
    pub const RIGHT_SYMBOL: TokenId = 76;
    pub const CROSS_SYMBOL: TokenId = 77;
    pub const OUTER_SYMBOL: TokenId = 78;
    pub const NATURAL_SYMBOL: TokenId = 79;
    pub const STRAIGHT_JOIN_SYMBOL: TokenId = 80;
    pub const ON_SYMBOL: TokenId = 81;
    pub const USING_SYMBOL: TokenId = 82;
    pub const AS_SYMBOL: TokenId = 83;
    pub const SET_SYMBOL: TokenId = 84;
    pub const NOT_SYMBOL: TokenId = 85;
    pub const NOT2_SYMBOL: TokenId = 86;
    pub const DISTINCT_SYMBOL: TokenId = 87;
    pub const ALL_SYMBOL: TokenId = 88;
    pub const AND_SYMBOL: TokenId = 89;
    pub const OR_SYMBOL: TokenId = 90;
    pub const XOR_SYMBOL: TokenId = 91;
    pub const IS_SYMBOL: TokenId = 92;
    pub const NULL_SYMBOL: TokenId = 93;
    pub const LIKE_SYMBOL: TokenId = 94;
    pub const REGEXP_SYMBOL: TokenId = 95;
    pub const BETWEEN_SYMBOL: TokenId = 96;
    pub const IN_SYMBOL: TokenId = 97;
    pub const EXISTS_SYMBOL: TokenId = 98;
    pub const ASC_SYMBOL: TokenId = 99;
    pub const DESC_SYMBOL: TokenId = 100;
    pub const CREATE_SYMBOL: TokenId = 101;
    pub const DROP_SYMBOL: TokenId = 102;
    pub const ALTER_SYMBOL: TokenId = 103;
    pub const TABLE_SYMBOL: TokenId = 104;
    pub const VIEW_SYMBOL: TokenId = 105;
    pub const TRIGGER_SYMBOL: TokenId = 106;
    pub const PROCEDURE_SYMBOL: TokenId = 107;
    pub const FUNCTION_SYMBOL: TokenId = 108;
    pub const EVENT_SYMBOL: TokenId = 109;
    pub const DATABASE_SYMBOL: TokenId = 110;
    pub const DATABASES_SYMBOL: TokenId = 111;
    pub const INSERT_SYMBOL: TokenId = 112;
    pub const UPDATE_SYMBOL: TokenId = 113;
    pub const DELETE_SYMBOL: TokenId = 114;
    pub const INTO_SYMBOL: TokenId = 115;
    pub const VALUES_SYMBOL: TokenId = 116;
    pub const REPLACE_SYMBOL: TokenId = 117;
    pub const IF_SYMBOL: TokenId = 118;
    pub const DEFAULT_SYMBOL: TokenId = 119;
    pub const PRIMARY_SYMBOL: TokenId = 120;
    pub const KEY_SYMBOL: TokenId = 121;
    pub const INDEX_SYMBOL: TokenId = 122;
    pub const WITH_SYMBOL: TokenId = 123;
    pub const COLLATE_SYMBOL: TokenId = 124;
    pub const TEMPORARY_SYMBOL: TokenId = 125;
    pub const IGNORE_SYMBOL: TokenId = 126;
    pub const BEFORE_SYMBOL: TokenId = 127;
    pub const AFTER_SYMBOL: TokenId = 128;
    pub const FOR_SYMBOL: TokenId = 129;
    pub const EACH_SYMBOL: TokenId = 130;
    pub const ROW_SYMBOL: TokenId = 131;
    pub const NEW_SYMBOL: TokenId = 132;
    pub const OLD_SYMBOL: TokenId = 133;
    pub const DEFINER_SYMBOL: TokenId = 134;
    pub const CHAR_SYMBOL: TokenId = 135;
    pub const VARCHAR_SYMBOL: TokenId = 136;
    pub const DECIMAL_SYMBOL: TokenId = 137;
    pub const INT_SYMBOL: TokenId = 138;
    pub const TINYINT_SYMBOL: TokenId = 139;
    pub const SMALLINT_SYMBOL: TokenId = 140;
    pub const MEDIUMINT_SYMBOL: TokenId = 141;
    pub const BIGINT_SYMBOL: TokenId = 142;
    pub const FLOAT_SYMBOL: TokenId = 143;
    pub const DOUBLE_SYMBOL: TokenId = 144;
    pub const NOW_SYMBOL: TokenId = 145;
    pub const DAY_SYMBOL: TokenId = 146;
    pub const SECOND_SYMBOL: TokenId = 147;
    pub const MINUTE_SYMBOL: TokenId = 148;
    pub const HOUR_SYMBOL: TokenId = 149;
    pub const WEEK_SYMBOL: TokenId = 150;
    pub const MONTH_SYMBOL: TokenId = 151;
    pub const QUARTER_SYMBOL: TokenId = 152;
    pub const YEAR_SYMBOL: TokenId = 153;
    pub const FRAC_SECOND_SYMBOL: TokenId = 154;
    pub const SUBSTRING_SYMBOL: TokenId = 155;
    pub const MID_SYMBOL: TokenId = 156;
    pub const STD_SYMBOL: TokenId = 157;
    pub const VARIANCE_SYMBOL: TokenId = 158;
    pub const USER_SYMBOL: TokenId = 159;
    pub const COLUMNS_SYMBOL: TokenId = 160;
    pub const NDBCLUSTER_SYMBOL: TokenId = 161;
    pub const RELAY_THREAD_SYMBOL: TokenId = 162;
    pub const ENGINE_SYMBOL: TokenId = 163;
    pub const CHARSET_SYMBOL: TokenId = 164;
    pub const OFFSET_SYMBOL: TokenId = 165;
}

/// Display names for the non-keyword tokens. Punctuation and operators are
/// quoted, matching the grammar vocabulary convention; the quotes are
/// stripped before presentation.
static LITERAL_NAMES: &[(TokenId, &str)] = &[
    (token::EOF, "EOF"),
    (token::EQUAL_OPERATOR, "'='"),
    (token::ASSIGN_OPERATOR, "':='"),
    (token::NULL_SAFE_EQUAL_OPERATOR, "'<=>'"),
    (token::GREATER_OR_EQUAL_OPERATOR, "'>='"),
    (token::GREATER_THAN_OPERATOR, "'>'"),
    (token::LESS_OR_EQUAL_OPERATOR, "'<='"),
    (token::LESS_THAN_OPERATOR, "'<'"),
    (token::NOT_EQUAL_OPERATOR, "'!='"),
    (token::PLUS_OPERATOR, "'+'"),
    (token::MINUS_OPERATOR, "'-'"),
    (token::MULT_OPERATOR, "'*'"),
    (token::DIV_OPERATOR, "'/'"),
    (token::MOD_OPERATOR, "'%'"),
    (token::LOGICAL_NOT_OPERATOR, "'!'"),
    (token::BITWISE_NOT_OPERATOR, "'~'"),
    (token::SHIFT_LEFT_OPERATOR, "'<<'"),
    (token::SHIFT_RIGHT_OPERATOR, "'>>'"),
    (token::LOGICAL_AND_OPERATOR, "'&&'"),
    (token::BITWISE_AND_OPERATOR, "'&'"),
    (token::BITWISE_XOR_OPERATOR, "'^'"),
    (token::LOGICAL_OR_OPERATOR, "'||'"),
    (token::BITWISE_OR_OPERATOR, "'|'"),
    (token::DOT_SYMBOL, "'.'"),
    (token::COMMA_SYMBOL, "','"),
    (token::SEMICOLON_SYMBOL, "';'"),
    (token::COLON_SYMBOL, "':'"),
    (token::OPEN_PAR_SYMBOL, "'('"),
    (token::CLOSE_PAR_SYMBOL, "')'"),
    (token::OPEN_CURLY_SYMBOL, "'{'"),
    (token::CLOSE_CURLY_SYMBOL, "'}'"),
    (token::PARAM_MARKER, "PARAM_MARKER"),
    (token::CONCAT_PIPES_SYMBOL, "'||'"),
    (token::IDENTIFIER, "IDENTIFIER"),
    (token::BACK_TICK_QUOTED_ID, "BACK_TICK_QUOTED_ID"),
    (token::DOUBLE_QUOTED_TEXT, "DOUBLE_QUOTED_TEXT"),
    (token::SINGLE_QUOTED_TEXT, "SINGLE_QUOTED_TEXT"),
    (token::INT_NUMBER, "INT_NUMBER"),
    (token::DECIMAL_NUMBER, "DECIMAL_NUMBER"),
    (token::HEX_NUMBER, "HEX_NUMBER"),
    (token::WHITESPACE, "WHITESPACE"),
    (token::LINE_COMMENT, "LINE_COMMENT"),
    (token::BLOCK_COMMENT, "BLOCK_COMMENT"),
    (token::OTHER, "OTHER"),
];

/// Token-id to display-name mapping plus identifier classification for the
/// hosted grammar. One process-wide instance, built on first use.
pub struct Vocabulary {
    display: HashMap<TokenId, &'static str>,
    by_name: HashMap<&'static str, TokenId>,
    reserved: HashSet<TokenId>,
    synonyms: HashMap<TokenId, &'static [&'static str]>,
}

static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();

impl Vocabulary {
    pub fn instance() -> &'static Vocabulary {
        VOCABULARY.get_or_init(Vocabulary::build)
    }

    fn build() -> Vocabulary {
        let mut display = HashMap::new();
        let mut by_name = HashMap::new();
        let mut reserved = HashSet::new();

        for (id, name) in LITERAL_NAMES {
            display.insert(*id, *name);
        }
        for def in keywords::KEYWORDS {
            display.insert(def.id, def.display);
            let name = def
                .display
                .strip_suffix("_SYMBOL")
                .unwrap_or(def.display);
            by_name.insert(name, def.id);
            if def.reserved {
                reserved.insert(def.id);
            }
        }
        for (name, id) in keywords::ALIASES {
            by_name.insert(*name, *id);
        }

        let mut synonyms = HashMap::new();
        for (id, spellings) in KEYWORD_SYNONYMS {
            synonyms.insert(*id, *spellings);
        }

        Vocabulary {
            display,
            by_name,
            reserved,
            synonyms,
        }
    }

    /// Display name of a token, `_SYMBOL`-suffixed for keywords and quoted
    /// for punctuation.
    pub fn display_name(&self, id: TokenId) -> &'static str {
        self.display.get(&id).copied().unwrap_or("OTHER")
    }

    /// Token id for an (unquoted) keyword spelling, case-insensitive.
    pub fn keyword_token(&self, name: &str) -> Option<TokenId> {
        self.by_name
            .get(name.to_ascii_uppercase().as_str())
            .copied()
    }

    /// Whether the token can appear where an identifier is expected. True
    /// for plain and quoted identifiers as well as non-reserved keywords.
    pub fn is_identifier(&self, id: TokenId) -> bool {
        match id {
            token::IDENTIFIER | token::BACK_TICK_QUOTED_ID => true,
            id if id >= token::KEYWORD_BASE => !self.reserved.contains(&id),
            _ => false,
        }
    }

    /// Alternative spellings to offer alongside the given keyword token.
    pub fn synonyms(&self, id: TokenId) -> &'static [&'static str] {
        self.synonyms.get(&id).copied().unwrap_or(&[])
    }
}

/// Strips one pair of surrounding identifier quotes, if present.
pub fn unquote(text: &str) -> String {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && matches!(first, b'`' | b'"' | b'\'') {
            return text[1..text.len() - 1].to_string();
        }
    }
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_is_case_insensitive() {
        let vocab = Vocabulary::instance();
        assert_eq!(vocab.keyword_token("select"), Some(token::SELECT_SYMBOL));
        assert_eq!(vocab.keyword_token("Select"), Some(token::SELECT_SYMBOL));
        assert_eq!(vocab.keyword_token("no_such_keyword"), None);
    }

    #[test]
    fn aliases_map_to_canonical_tokens() {
        let vocab = Vocabulary::instance();
        assert_eq!(vocab.keyword_token("schema"), Some(token::DATABASE_SYMBOL));
        assert_eq!(vocab.keyword_token("integer"), Some(token::INT_SYMBOL));
        assert_eq!(vocab.display_name(token::DATABASE_SYMBOL), "DATABASE_SYMBOL");
    }

    #[test]
    fn identifier_classification() {
        let vocab = Vocabulary::instance();
        assert!(vocab.is_identifier(token::IDENTIFIER));
        assert!(vocab.is_identifier(token::BACK_TICK_QUOTED_ID));
        assert!(vocab.is_identifier(token::NEW_SYMBOL));
        assert!(vocab.is_identifier(token::VIEW_SYMBOL));
        assert!(!vocab.is_identifier(token::SELECT_SYMBOL));
        assert!(!vocab.is_identifier(token::DOT_SYMBOL));
        assert!(!vocab.is_identifier(token::INT_NUMBER));
    }

    #[test]
    fn synonym_lookup() {
        let vocab = Vocabulary::instance();
        assert_eq!(
            vocab.synonyms(token::NOW_SYMBOL),
            &["CURRENT_TIMESTAMP", "LOCALTIME", "LOCALTIMESTAMP"]
        );
        assert!(vocab.synonyms(token::SELECT_SYMBOL).is_empty());
    }

    #[test]
    fn unquote_strips_matching_quotes_only() {
        assert_eq!(unquote("`tbl`"), "tbl");
        assert_eq!(unquote("\"tbl\""), "tbl");
        assert_eq!(unquote("tbl"), "tbl");
        assert_eq!(unquote("`tbl"), "`tbl");
        assert_eq!(unquote(""), "");
    }
}
