//! Qualified-identifier analysis around the caret.
//!
//! Both functions examine only tokens up to the caret (plus at most the one
//! following token, solely as a terminator). The user's intent to the right
//! of the caret is unknowable, so the analysis never reads forward.

use crate::scanner::Scanner;
use crate::types::ObjectFlags;
use crate::vocab::{token, unquote, Vocabulary};

/// Determines the qualifier of a dotted identifier with up to two parts
/// (`id` or `id.id`) ending at or near the caret.
///
/// Five caret positions are recognized: in the first id (including directly
/// after its last character), in the space between the first id and the dot,
/// on the dot itself (treated like the first id), in the space after the
/// dot, and in the second id. All parts are optional.
///
/// Returns the flags describing what to offer, and the already-typed
/// qualifier (empty when the caret is still in the first part).
pub fn determine_qualifier(scanner: &mut Scanner<'_>, vocab: &Vocabulary) -> (ObjectFlags, String) {
    let position = scanner.token_index();

    if scanner.token_channel() != crate::lexer::Channel::Default {
        scanner.next(true);
    }

    if !scanner.is(token::DOT_SYMBOL) && !vocab.is_identifier(scanner.token_type()) {
        // At the end of an incomplete identifier spec. Step back so the
        // tests below see the id/dot sequence.
        scanner.previous(true);
    }

    // Go left until something unrelated to an id, crossing at most one dot.
    if position > 0 {
        if vocab.is_identifier(scanner.token_type()) && scanner.look_back() == token::DOT_SYMBOL {
            scanner.previous(true);
        }
        if scanner.is(token::DOT_SYMBOL) && vocab.is_identifier(scanner.look_back()) {
            scanner.previous(true);
        }
    }

    // The scanner is now on the leading identifier (or dot when there is no
    // leading id).
    let mut temp = String::new();
    if vocab.is_identifier(scanner.token_type()) {
        temp = unquote(scanner.token_text());
        scanner.next(true);
    }

    // No dot after the first part, or the walk passed the caret: everything
    // is still open.
    if !scanner.is(token::DOT_SYMBOL) || position <= scanner.token_index() {
        return (
            ObjectFlags::SHOW_FIRST | ObjectFlags::SHOW_SECOND,
            String::new(),
        );
    }

    (ObjectFlags::SHOW_SECOND, temp)
}

/// Variant of [`determine_qualifier`] for dotted identifiers with up to
/// three parts, as used by column references (and `table.*` wildcards).
///
/// Returns the flags plus the schema and table qualifiers, where given. With
/// only a single dot typed it cannot be known whether the left side names a
/// schema or a table; both outputs then carry the same text so the caller
/// can try either, falling back to the default schema.
pub fn determine_schema_table_qualifier(
    scanner: &mut Scanner<'_>,
    vocab: &Vocabulary,
) -> (ObjectFlags, String, String) {
    let position = scanner.token_index();

    if scanner.token_channel() != crate::lexer::Channel::Default {
        scanner.next(true);
    }

    if !scanner.is(token::DOT_SYMBOL) && !vocab.is_identifier(scanner.token_type()) {
        scanner.previous(true);
    }

    // Go left until something unrelated to an id, crossing at most two dots.
    if position > 0 {
        if vocab.is_identifier(scanner.token_type()) && scanner.look_back() == token::DOT_SYMBOL {
            scanner.previous(true);
        }
        if scanner.is(token::DOT_SYMBOL) && vocab.is_identifier(scanner.look_back()) {
            scanner.previous(true);

            // And once more.
            if scanner.look_back() == token::DOT_SYMBOL {
                scanner.previous(true);
                if vocab.is_identifier(scanner.look_back()) {
                    scanner.previous(true);
                }
            }
        }
    }

    let mut schema = String::new();
    let mut table = String::new();

    let mut temp = String::new();
    if vocab.is_identifier(scanner.token_type()) {
        temp = unquote(scanner.token_text());
        scanner.next(true);
    }

    if !scanner.is(token::DOT_SYMBOL) || position <= scanner.token_index() {
        return (
            ObjectFlags::SHOW_SCHEMAS | ObjectFlags::SHOW_TABLES | ObjectFlags::SHOW_COLUMNS,
            schema,
            table,
        );
    }

    scanner.next(true); // Skip the dot.
    table = temp.clone();
    schema = temp;

    if vocab.is_identifier(scanner.token_type()) {
        let second = unquote(scanner.token_text());
        scanner.next(true);

        if !scanner.is(token::DOT_SYMBOL) || position <= scanner.token_index() {
            // Single dot: the schema part is only valid for tables; columns
            // must fall back to the default schema.
            return (
                ObjectFlags::SHOW_TABLES | ObjectFlags::SHOW_COLUMNS,
                schema,
                table,
            );
        }

        table = second;
        return (ObjectFlags::SHOW_COLUMNS, schema, table);
    }

    (
        ObjectFlags::SHOW_TABLES | ObjectFlags::SHOW_COLUMNS,
        schema,
        table,
    )
}
