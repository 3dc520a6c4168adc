mod common;

use caretscope_core::lexer::{determine_query_type, tokenize};
use caretscope_core::{collect_references, Scanner, TableReference};

use common::sql_with_caret;

fn visible_references(marked: &str) -> Vec<TableReference> {
    let (sql, line, column) = sql_with_caret(marked);
    let tokens = tokenize(&sql).unwrap();
    let mut scanner = Scanner::new(&tokens);
    scanner.advance_to(line + 1, column);
    let stack = collect_references(&tokens, scanner.token_index(), determine_query_type(&tokens));
    let mut out = Vec::new();
    stack.take_snapshot(&mut out, false);
    out
}

fn reference(schema: &str, table: &str, alias: &str) -> TableReference {
    TableReference {
        schema: schema.into(),
        table: table.into(),
        alias: alias.into(),
    }
}

#[test]
fn multi_line_statement() {
    let refs = visible_references("SELECT ^\nFROM t1\nJOIN s2.t2 AS o\nWHERE t1.a = o.b");
    assert_eq!(
        refs,
        vec![reference("", "t1", ""), reference("s2", "t2", "o")]
    );
}

#[test]
fn caret_in_deeply_nested_subquery_sees_every_enclosing_scope() {
    let refs = visible_references(
        "SELECT a FROM t1 WHERE x IN (SELECT b FROM t2 WHERE y IN (SELECT ^ FROM t3))",
    );
    assert_eq!(
        refs,
        vec![
            reference("", "t1", ""),
            reference("", "t2", ""),
            reference("", "t3", ""),
        ]
    );
}

#[test]
fn closed_scopes_before_the_caret_are_gone() {
    let refs = visible_references(
        "SELECT (SELECT x FROM t9), (SELECT y FROM t8) FROM t1 WHERE ^",
    );
    assert_eq!(refs, vec![reference("", "t1", "")]);
}

#[test]
fn comma_list_with_mixed_aliases() {
    let refs = visible_references("SELECT ^ FROM t1 a, t2 AS b, s3.t3");
    assert_eq!(
        refs,
        vec![
            reference("", "t1", "a"),
            reference("", "t2", "b"),
            reference("s3", "t3", ""),
        ]
    );
}

#[test]
fn snapshot_preserves_the_stack() {
    let (sql, line, column) = sql_with_caret("SELECT ^ FROM t1");
    let tokens = tokenize(&sql).unwrap();
    let mut scanner = Scanner::new(&tokens);
    scanner.advance_to(line + 1, column);
    let stack = collect_references(&tokens, scanner.token_index(), determine_query_type(&tokens));

    let mut first = Vec::new();
    stack.take_snapshot(&mut first, false);
    let mut second = Vec::new();
    stack.take_snapshot(&mut second, false);
    assert_eq!(first, second);

    // A second snapshot into the same list does not duplicate.
    stack.take_snapshot(&mut first, false);
    assert_eq!(first, second);
}

#[test]
fn case_sensitivity_knob_controls_snapshot_dedup() {
    let (sql, line, column) =
        sql_with_caret("SELECT a FROM T1 WHERE x IN (SELECT ^ FROM t1)");
    let tokens = tokenize(&sql).unwrap();
    let mut scanner = Scanner::new(&tokens);
    scanner.advance_to(line + 1, column);
    let stack = collect_references(&tokens, scanner.token_index(), determine_query_type(&tokens));

    let mut insensitive = Vec::new();
    stack.take_snapshot(&mut insensitive, false);
    assert_eq!(insensitive.len(), 1);

    let mut sensitive = Vec::new();
    stack.take_snapshot(&mut sensitive, true);
    assert_eq!(sensitive.len(), 2);
}

#[test]
fn garbage_between_clauses_is_tolerated() {
    let refs = visible_references("SELECT ^ FROM t1 %% t2, t3");
    // Extraction stops at the unexpected token but keeps what it has.
    assert_eq!(refs, vec![reference("", "t1", "")]);
}
