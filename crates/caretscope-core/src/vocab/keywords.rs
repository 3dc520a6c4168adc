//! Static keyword tables for the hosted MySQL-style grammar.
//!
//! Display names follow the grammar vocabulary convention: keyword names end
//! in `_SYMBOL` and are stripped before presentation. `ALIASES` lists
//! alternative spellings that lex to an existing token; `KEYWORD_SYNONYMS`
//! lists spellings that should be offered as additional completion entries
//! next to their canonical keyword.

use super::token;
use super::TokenId;

pub(crate) struct KeywordDef {
    pub id: TokenId,
    pub display: &'static str,
    pub reserved: bool,
}

macro_rules! kw {
    ($id:expr, $display:literal, reserved) => {
        KeywordDef { id: $id, display: $display, reserved: true }
    };
    ($id:expr, $display:literal) => {
        KeywordDef { id: $id, display: $display, reserved: false }
    };
}

pub(crate) static KEYWORDS: &[KeywordDef] = &[
    kw!(token::SELECT_SYMBOL, "SELECT_SYMBOL", reserved),
    kw!(token::FROM_SYMBOL, "FROM_SYMBOL", reserved),
    kw!(token::WHERE_SYMBOL, "WHERE_SYMBOL", reserved),
    kw!(token::GROUP_SYMBOL, "GROUP_SYMBOL", reserved),
    kw!(token::BY_SYMBOL, "BY_SYMBOL", reserved),
    kw!(token::HAVING_SYMBOL, "HAVING_SYMBOL", reserved),
    kw!(token::ORDER_SYMBOL, "ORDER_SYMBOL", reserved),
    kw!(token::LIMIT_SYMBOL, "LIMIT_SYMBOL", reserved),
    kw!(token::UNION_SYMBOL, "UNION_SYMBOL", reserved),
    kw!(token::JOIN_SYMBOL, "JOIN_SYMBOL", reserved),
    kw!(token::INNER_SYMBOL, "INNER_SYMBOL", reserved),
    kw!(token::LEFT_SYMBOL, "LEFT_SYMBOL", reserved),
    kw!(token::RIGHT_SYMBOL, "RIGHT_SYMBOL", reserved),
    kw!(token::CROSS_SYMBOL, "CROSS_SYMBOL", reserved),
    kw!(token::OUTER_SYMBOL, "OUTER_SYMBOL", reserved),
    kw!(token::NATURAL_SYMBOL, "NATURAL_SYMBOL", reserved),
    kw!(token::STRAIGHT_JOIN_SYMBOL, "STRAIGHT_JOIN_SYMBOL", reserved),
    kw!(token::ON_SYMBOL, "ON_SYMBOL", reserved),
    kw!(token::USING_SYMBOL, "USING_SYMBOL", reserved),
    kw!(token::AS_SYMBOL, "AS_SYMBOL", reserved),
    kw!(token::SET_SYMBOL, "SET_SYMBOL", reserved),
    kw!(token::NOT_SYMBOL, "NOT_SYMBOL", reserved),
    kw!(token::NOT2_SYMBOL, "NOT2_SYMBOL", reserved),
    kw!(token::DISTINCT_SYMBOL, "DISTINCT_SYMBOL", reserved),
    kw!(token::ALL_SYMBOL, "ALL_SYMBOL", reserved),
    kw!(token::AND_SYMBOL, "AND_SYMBOL", reserved),
    kw!(token::OR_SYMBOL, "OR_SYMBOL", reserved),
    kw!(token::XOR_SYMBOL, "XOR_SYMBOL", reserved),
    kw!(token::IS_SYMBOL, "IS_SYMBOL", reserved),
    kw!(token::NULL_SYMBOL, "NULL_SYMBOL", reserved),
    kw!(token::LIKE_SYMBOL, "LIKE_SYMBOL", reserved),
    kw!(token::REGEXP_SYMBOL, "REGEXP_SYMBOL", reserved),
    kw!(token::BETWEEN_SYMBOL, "BETWEEN_SYMBOL", reserved),
    kw!(token::IN_SYMBOL, "IN_SYMBOL", reserved),
    kw!(token::EXISTS_SYMBOL, "EXISTS_SYMBOL", reserved),
    kw!(token::ASC_SYMBOL, "ASC_SYMBOL", reserved),
    kw!(token::DESC_SYMBOL, "DESC_SYMBOL", reserved),
    kw!(token::CREATE_SYMBOL, "CREATE_SYMBOL", reserved),
    kw!(token::DROP_SYMBOL, "DROP_SYMBOL", reserved),
    kw!(token::ALTER_SYMBOL, "ALTER_SYMBOL", reserved),
    kw!(token::TABLE_SYMBOL, "TABLE_SYMBOL", reserved),
    kw!(token::VIEW_SYMBOL, "VIEW_SYMBOL"),
    kw!(token::TRIGGER_SYMBOL, "TRIGGER_SYMBOL", reserved),
    kw!(token::PROCEDURE_SYMBOL, "PROCEDURE_SYMBOL", reserved),
    kw!(token::FUNCTION_SYMBOL, "FUNCTION_SYMBOL"),
    kw!(token::EVENT_SYMBOL, "EVENT_SYMBOL"),
    kw!(token::DATABASE_SYMBOL, "DATABASE_SYMBOL", reserved),
    kw!(token::DATABASES_SYMBOL, "DATABASES_SYMBOL", reserved),
    kw!(token::INSERT_SYMBOL, "INSERT_SYMBOL", reserved),
    kw!(token::UPDATE_SYMBOL, "UPDATE_SYMBOL", reserved),
    kw!(token::DELETE_SYMBOL, "DELETE_SYMBOL", reserved),
    kw!(token::INTO_SYMBOL, "INTO_SYMBOL", reserved),
    kw!(token::VALUES_SYMBOL, "VALUES_SYMBOL", reserved),
    kw!(token::REPLACE_SYMBOL, "REPLACE_SYMBOL", reserved),
    kw!(token::IF_SYMBOL, "IF_SYMBOL", reserved),
    kw!(token::DEFAULT_SYMBOL, "DEFAULT_SYMBOL", reserved),
    kw!(token::PRIMARY_SYMBOL, "PRIMARY_SYMBOL", reserved),
    kw!(token::KEY_SYMBOL, "KEY_SYMBOL", reserved),
    kw!(token::INDEX_SYMBOL, "INDEX_SYMBOL", reserved),
    kw!(token::WITH_SYMBOL, "WITH_SYMBOL", reserved),
    kw!(token::COLLATE_SYMBOL, "COLLATE_SYMBOL", reserved),
    kw!(token::TEMPORARY_SYMBOL, "TEMPORARY_SYMBOL"),
    kw!(token::IGNORE_SYMBOL, "IGNORE_SYMBOL", reserved),
    kw!(token::BEFORE_SYMBOL, "BEFORE_SYMBOL", reserved),
    kw!(token::AFTER_SYMBOL, "AFTER_SYMBOL"),
    kw!(token::FOR_SYMBOL, "FOR_SYMBOL", reserved),
    kw!(token::EACH_SYMBOL, "EACH_SYMBOL", reserved),
    kw!(token::ROW_SYMBOL, "ROW_SYMBOL"),
    kw!(token::NEW_SYMBOL, "NEW_SYMBOL"),
    kw!(token::OLD_SYMBOL, "OLD_SYMBOL"),
    kw!(token::DEFINER_SYMBOL, "DEFINER_SYMBOL"),
    kw!(token::CHAR_SYMBOL, "CHAR_SYMBOL", reserved),
    kw!(token::VARCHAR_SYMBOL, "VARCHAR_SYMBOL", reserved),
    kw!(token::DECIMAL_SYMBOL, "DECIMAL_SYMBOL", reserved),
    kw!(token::INT_SYMBOL, "INT_SYMBOL", reserved),
    kw!(token::TINYINT_SYMBOL, "TINYINT_SYMBOL", reserved),
    kw!(token::SMALLINT_SYMBOL, "SMALLINT_SYMBOL", reserved),
    kw!(token::MEDIUMINT_SYMBOL, "MEDIUMINT_SYMBOL", reserved),
    kw!(token::BIGINT_SYMBOL, "BIGINT_SYMBOL", reserved),
    kw!(token::FLOAT_SYMBOL, "FLOAT_SYMBOL", reserved),
    kw!(token::DOUBLE_SYMBOL, "DOUBLE_SYMBOL", reserved),
    kw!(token::NOW_SYMBOL, "NOW_SYMBOL"),
    kw!(token::DAY_SYMBOL, "DAY_SYMBOL"),
    kw!(token::SECOND_SYMBOL, "SECOND_SYMBOL"),
    kw!(token::MINUTE_SYMBOL, "MINUTE_SYMBOL"),
    kw!(token::HOUR_SYMBOL, "HOUR_SYMBOL"),
    kw!(token::WEEK_SYMBOL, "WEEK_SYMBOL"),
    kw!(token::MONTH_SYMBOL, "MONTH_SYMBOL"),
    kw!(token::QUARTER_SYMBOL, "QUARTER_SYMBOL"),
    kw!(token::YEAR_SYMBOL, "YEAR_SYMBOL"),
    kw!(token::FRAC_SECOND_SYMBOL, "FRAC_SECOND_SYMBOL"),
    kw!(token::SUBSTRING_SYMBOL, "SUBSTRING_SYMBOL"),
    kw!(token::MID_SYMBOL, "MID_SYMBOL"),
    kw!(token::STD_SYMBOL, "STD_SYMBOL"),
    kw!(token::VARIANCE_SYMBOL, "VARIANCE_SYMBOL"),
    kw!(token::USER_SYMBOL, "USER_SYMBOL"),
    kw!(token::COLUMNS_SYMBOL, "COLUMNS_SYMBOL"),
    kw!(token::NDBCLUSTER_SYMBOL, "NDBCLUSTER_SYMBOL"),
    kw!(token::RELAY_THREAD_SYMBOL, "RELAY_THREAD_SYMBOL"),
    kw!(token::ENGINE_SYMBOL, "ENGINE_SYMBOL"),
    kw!(token::CHARSET_SYMBOL, "CHARSET_SYMBOL"),
    kw!(token::OFFSET_SYMBOL, "OFFSET_SYMBOL"),
];

/// Spellings the lexer maps onto an existing token.
pub(crate) static ALIASES: &[(&str, TokenId)] = &[
    ("SCHEMA", token::DATABASE_SYMBOL),
    ("SCHEMAS", token::DATABASES_SYMBOL),
    ("CHARACTER", token::CHAR_SYMBOL),
    ("DEC", token::DECIMAL_SYMBOL),
    ("INTEGER", token::INT_SYMBOL),
    ("INT4", token::INT_SYMBOL),
    ("RLIKE", token::REGEXP_SYMBOL),
    ("SUBSTR", token::SUBSTRING_SYMBOL),
    ("DISTINCTROW", token::DISTINCT_SYMBOL),
];

/// Alternative spellings offered as separate completion entries whenever the
/// canonical keyword is a candidate. Extending a grammar revision with new
/// synonyms only touches this table.
pub static KEYWORD_SYNONYMS: &[(TokenId, &[&str])] = &[
    (token::CHAR_SYMBOL, &["CHARACTER"]),
    (token::NOW_SYMBOL, &["CURRENT_TIMESTAMP", "LOCALTIME", "LOCALTIMESTAMP"]),
    (token::DAY_SYMBOL, &["DAYOFMONTH", "SQL_TSI_DAY"]),
    (token::DECIMAL_SYMBOL, &["DEC"]),
    (token::DISTINCT_SYMBOL, &["DISTINCTROW"]),
    (token::COLUMNS_SYMBOL, &["FIELDS"]),
    (token::FLOAT_SYMBOL, &["FLOAT4"]),
    (token::DOUBLE_SYMBOL, &["FLOAT8"]),
    (token::INT_SYMBOL, &["INTEGER", "INT4"]),
    (token::RELAY_THREAD_SYMBOL, &["IO_THREAD"]),
    (token::SUBSTRING_SYMBOL, &["SUBSTR", "MID"]),
    (token::MID_SYMBOL, &["MEDIUMINT"]),
    (token::MEDIUMINT_SYMBOL, &["MIDDLEINT", "INT3"]),
    (token::NDBCLUSTER_SYMBOL, &["NDB"]),
    (token::REGEXP_SYMBOL, &["RLIKE"]),
    (token::DATABASE_SYMBOL, &["SCHEMA"]),
    (token::DATABASES_SYMBOL, &["SCHEMAS"]),
    (token::USER_SYMBOL, &["SESSION_USER"]),
    (token::STD_SYMBOL, &["STDDEV"]),
    (token::VARCHAR_SYMBOL, &["VARCHARACTER"]),
    (token::VARIANCE_SYMBOL, &["VAR_POP"]),
    (token::TINYINT_SYMBOL, &["INT1"]),
    (token::SMALLINT_SYMBOL, &["INT2"]),
    (token::BIGINT_SYMBOL, &["INT8"]),
    (token::FRAC_SECOND_SYMBOL, &["SQL_TSI_FRAC_SECOND"]),
    (token::SECOND_SYMBOL, &["SQL_TSI_SECOND"]),
    (token::MINUTE_SYMBOL, &["SQL_TSI_MINUTE"]),
    (token::HOUR_SYMBOL, &["SQL_TSI_HOUR"]),
    (token::WEEK_SYMBOL, &["SQL_TSI_WEEK"]),
    (token::MONTH_SYMBOL, &["SQL_TSI_MONTH"]),
    (token::QUARTER_SYMBOL, &["SQL_TSI_QUARTER"]),
    (token::YEAR_SYMBOL, &["SQL_TSI_YEAR"]),
];
