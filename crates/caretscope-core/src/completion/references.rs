//! FROM-clause table-reference extraction.
//!
//! Column completion needs to know which tables are in scope at the caret,
//! including tables named *after* it (`SELECT ^ FROM t1`). Inner queries see
//! the FROM tables of outer queries but not the reverse, so references are
//! kept on a stack of nesting levels and only the levels enclosing the caret
//! survive into the snapshot.
//!
//! The extractor is deliberately forgiving: the statement around the caret
//! is usually incomplete, so any token it cannot place simply ends the
//! clause being parsed and keeps what was collected so far.

use crate::lexer::{Channel, TokenInfo};
use crate::types::{names_equal, QueryType, TableReference};
use crate::vocab::{token, TokenId};

/// Per-scope reference vectors, outermost first.
#[derive(Debug, Default)]
pub struct ReferenceStack {
    levels: Vec<Vec<TableReference>>,
}

impl ReferenceStack {
    pub fn levels(&self) -> &[Vec<TableReference>] {
        &self.levels
    }

    /// Appends every reference on every level to `out`, outermost first,
    /// skipping `(schema, table, alias)` triples already present. The stack
    /// itself is left intact; another snapshot may follow.
    pub fn take_snapshot(&self, out: &mut Vec<TableReference>, case_sensitive: bool) {
        for level in &self.levels {
            for reference in level {
                let duplicate = out.iter().any(|existing| {
                    names_equal(&existing.schema, &reference.schema, case_sensitive)
                        && names_equal(&existing.table, &reference.table, case_sensitive)
                        && names_equal(&existing.alias, &reference.alias, case_sensitive)
                });
                if !duplicate {
                    out.push(reference.clone());
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum FromState {
    /// Not inside a FROM clause at this level.
    #[default]
    Idle,
    /// After `FROM`, a comma, or a join keyword: a table reference may start.
    ExpectTable,
    /// After `first_part .`: the table part of a qualified name may follow.
    ExpectSecondId,
    /// A reference was parsed; an alias, a dot, or a list continuation may
    /// follow.
    AfterTable,
    /// After `AS`.
    ExpectAlias,
    /// Alias consumed; only list continuations are valid.
    AfterAlias,
    /// Inside an `ON`/`USING` join condition; skipped until the next join
    /// keyword or clause terminator.
    JoinCondition,
}

#[derive(Debug, Default)]
struct Level {
    refs: Vec<TableReference>,
    state: FromState,
    pending: Option<TableReference>,
    /// This level is a parenthesized derived table; closing it yields an
    /// anonymous reference on the parent level.
    derived_for_parent: bool,
    /// Level index to reactivate when this level closes.
    parent_active: usize,
}

impl Level {
    fn flush(&mut self) {
        if let Some(pending) = self.pending.take() {
            if !pending.table.is_empty() || !pending.alias.is_empty() {
                self.refs.push(pending);
            }
        }
    }
}

fn is_join_keyword(id: TokenId) -> bool {
    matches!(
        id,
        token::JOIN_SYMBOL
            | token::INNER_SYMBOL
            | token::LEFT_SYMBOL
            | token::RIGHT_SYMBOL
            | token::CROSS_SYMBOL
            | token::OUTER_SYMBOL
            | token::NATURAL_SYMBOL
            | token::STRAIGHT_JOIN_SYMBOL
    )
}

fn is_clause_terminator(id: TokenId) -> bool {
    matches!(
        id,
        token::WHERE_SYMBOL
            | token::GROUP_SYMBOL
            | token::HAVING_SYMBOL
            | token::ORDER_SYMBOL
            | token::LIMIT_SYMBOL
            | token::UNION_SYMBOL
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Statement start up to the caret: scopes closed on the way are gone
    /// for good.
    Leading,
    /// Caret to statement end: scopes enclosing the caret must survive for
    /// the snapshot, so closing one only retreats the active level.
    Trailing,
}

struct Walker<'a> {
    vocab: &'a crate::vocab::Vocabulary,
    stack: Vec<Level>,
    active: usize,
    /// Number of levels that were open at the caret.
    protected: usize,
    /// Waiting for the `ON <table>` clause of a CREATE TRIGGER header.
    trigger_table_wanted: bool,
    done: bool,
}

impl<'a> Walker<'a> {
    fn new(query_type: QueryType) -> Self {
        Self {
            vocab: crate::vocab::Vocabulary::instance(),
            stack: vec![Level::default()],
            active: 0,
            protected: 1,
            trigger_table_wanted: query_type == QueryType::CreateTrigger,
            done: false,
        }
    }

    fn level(&mut self) -> &mut Level {
        &mut self.stack[self.active]
    }

    fn open_level(&mut self) {
        let derived = self.level().state == FromState::ExpectTable;
        let parent_active = self.active;
        self.stack.push(Level {
            derived_for_parent: derived,
            parent_active,
            ..Level::default()
        });
        self.active = self.stack.len() - 1;
    }

    fn close_level(&mut self, phase: Phase) {
        let top = self.stack.len() - 1;
        if self.active == top && self.stack.len() > self.protected {
            if let Some(mut closed) = self.stack.pop() {
                closed.flush();
                self.active = closed.parent_active.min(self.stack.len() - 1);
                if closed.derived_for_parent {
                    // `(...)` in table position: the parent gains an
                    // anonymous reference that may still take an alias.
                    let level = self.level();
                    level.pending = Some(TableReference::default());
                    level.state = FromState::AfterTable;
                }
            }
            return;
        }

        match phase {
            Phase::Leading => {
                // Unbalanced close at the statement level; ignore it.
                self.level().flush();
                self.level().state = FromState::Idle;
            }
            Phase::Trailing => {
                // Leaving a scope the caret lives in. The level stays on the
                // stack for the snapshot, parsing continues outside of it.
                let derived = {
                    let leaving = self.level();
                    leaving.flush();
                    leaving.state = FromState::Idle;
                    leaving.derived_for_parent
                };
                if self.active == 0 {
                    self.done = true;
                } else {
                    self.active -= 1;
                    if derived {
                        let level = self.level();
                        level.pending = Some(TableReference::default());
                        level.state = FromState::AfterTable;
                    }
                }
            }
        }
    }

    fn step(&mut self, phase: Phase, tok: &TokenInfo) {
        if tok.channel == Channel::Hidden {
            return;
        }

        match tok.token_type {
            token::SEMICOLON_SYMBOL => {
                self.finish_levels();
                self.done = true;
                return;
            }
            token::OPEN_PAR_SYMBOL => {
                self.open_level();
                return;
            }
            token::CLOSE_PAR_SYMBOL => {
                self.close_level(phase);
                return;
            }
            token::FROM_SYMBOL => {
                let level = self.level();
                level.flush();
                level.state = FromState::ExpectTable;
                return;
            }
            token::ON_SYMBOL if self.trigger_table_wanted && self.active == 0 => {
                self.trigger_table_wanted = false;
                self.level().state = FromState::ExpectTable;
                return;
            }
            _ => {}
        }

        let is_identifier = self.vocab.is_identifier(tok.token_type);
        let level = self.level();

        match level.state {
            FromState::Idle => {}
            FromState::ExpectTable => {
                if is_identifier {
                    level.pending = Some(TableReference {
                        schema: String::new(),
                        table: tok.text.clone(),
                        alias: String::new(),
                    });
                    level.state = FromState::AfterTable;
                } else if is_join_keyword(tok.token_type) {
                    // `LEFT OUTER JOIN` etc.; keep waiting for the table.
                } else {
                    level.state = FromState::Idle;
                }
            }
            FromState::ExpectSecondId => {
                if is_identifier {
                    if let Some(pending) = level.pending.as_mut() {
                        pending.table = tok.text.clone();
                    }
                    level.state = FromState::AfterTable;
                } else {
                    level.pending = None;
                    level.state = FromState::Idle;
                }
            }
            FromState::AfterTable => match tok.token_type {
                token::DOT_SYMBOL => {
                    if let Some(pending) = level.pending.as_mut() {
                        pending.schema = std::mem::take(&mut pending.table);
                    }
                    level.state = FromState::ExpectSecondId;
                }
                token::AS_SYMBOL => level.state = FromState::ExpectAlias,
                token::COMMA_SYMBOL => {
                    level.flush();
                    level.state = FromState::ExpectTable;
                }
                token::ON_SYMBOL | token::USING_SYMBOL => {
                    level.flush();
                    level.state = FromState::JoinCondition;
                }
                id if is_join_keyword(id) => {
                    level.flush();
                    level.state = FromState::ExpectTable;
                }
                id if is_clause_terminator(id) => {
                    level.flush();
                    level.state = FromState::Idle;
                }
                _ if is_identifier => {
                    if let Some(pending) = level.pending.as_mut() {
                        pending.alias = tok.text.clone();
                    }
                    level.state = FromState::AfterAlias;
                }
                _ => {
                    level.flush();
                    level.state = FromState::Idle;
                }
            },
            FromState::ExpectAlias => {
                if is_identifier {
                    if let Some(pending) = level.pending.as_mut() {
                        pending.alias = tok.text.clone();
                    }
                    level.state = FromState::AfterAlias;
                } else {
                    level.flush();
                    level.state = FromState::Idle;
                }
            }
            FromState::AfterAlias => match tok.token_type {
                token::COMMA_SYMBOL => {
                    level.flush();
                    level.state = FromState::ExpectTable;
                }
                token::ON_SYMBOL | token::USING_SYMBOL => {
                    level.flush();
                    level.state = FromState::JoinCondition;
                }
                id if is_join_keyword(id) => {
                    level.flush();
                    level.state = FromState::ExpectTable;
                }
                id if is_clause_terminator(id) => {
                    level.flush();
                    level.state = FromState::Idle;
                }
                _ => {
                    level.flush();
                    level.state = FromState::Idle;
                }
            },
            FromState::JoinCondition => {
                if is_join_keyword(tok.token_type) || tok.token_type == token::COMMA_SYMBOL {
                    level.state = FromState::ExpectTable;
                } else if is_clause_terminator(tok.token_type) {
                    level.state = FromState::Idle;
                }
            }
        }
    }

    fn finish_levels(&mut self) {
        for level in &mut self.stack {
            level.flush();
        }
    }

    fn finish(mut self) -> ReferenceStack {
        self.finish_levels();
        ReferenceStack {
            levels: self.stack.into_iter().map(|level| level.refs).collect(),
        }
    }
}

fn statement_start(tokens: &[TokenInfo], caret_index: usize) -> usize {
    let mut i = caret_index.min(tokens.len());
    while i > 0 {
        i -= 1;
        if tokens[i].token_type == token::SEMICOLON_SYMBOL {
            return i + 1;
        }
    }
    0
}

/// Collects the table references visible to a column completion at
/// `caret_index`, walking the caret's statement in both directions.
pub fn collect_references(
    tokens: &[TokenInfo],
    caret_index: usize,
    query_type: QueryType,
) -> ReferenceStack {
    let caret_index = caret_index.min(tokens.len());
    let mut walker = Walker::new(query_type);

    for tok in &tokens[statement_start(tokens, caret_index)..caret_index] {
        if walker.done {
            break;
        }
        walker.step(Phase::Leading, tok);
    }

    walker.protected = walker.stack.len();
    walker.active = walker.stack.len() - 1;

    for tok in &tokens[caret_index..] {
        if walker.done {
            break;
        }
        walker.step(Phase::Trailing, tok);
    }

    walker.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    fn refs_at(marked: &str) -> Vec<TableReference> {
        let caret = marked.find('^').expect("missing caret marker");
        let sql: String = marked.replacen('^', "", 1);
        let tokens = tokenize(&sql).unwrap();
        let caret_index = tokens
            .iter()
            .position(|t| {
                t.line == 1 && t.column >= caret
            })
            .unwrap_or(tokens.len() - 1);
        let query_type = crate::lexer::determine_query_type(&tokens);
        let stack = collect_references(&tokens, caret_index, query_type);
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
    fn from_after_caret_is_collected() {
        let refs = refs_at("SELECT ^ FROM t1");
        assert_eq!(refs, vec![reference("", "t1", "")]);
    }

    #[test]
    fn from_before_caret_is_collected() {
        let refs = refs_at("SELECT a FROM t1 WHERE ^");
        assert_eq!(refs, vec![reference("", "t1", "")]);
    }

    #[test]
    fn qualified_names_aliases_and_lists() {
        let refs = refs_at("SELECT ^ FROM t1 AS a, s2.t2 b, t3");
        assert_eq!(
            refs,
            vec![
                reference("", "t1", "a"),
                reference("s2", "t2", "b"),
                reference("", "t3", ""),
            ]
        );
    }

    #[test]
    fn join_conditions_are_skipped() {
        let refs = refs_at("SELECT ^ FROM t1 JOIN t2 ON t1.a = t2.b LEFT OUTER JOIN t3 USING (c)");
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
    fn outer_scope_is_visible_from_subquery() {
        let refs = refs_at("SELECT a FROM t1 WHERE x IN (SELECT ^ FROM t2)");
        assert_eq!(refs, vec![reference("", "t1", ""), reference("", "t2", "")]);
    }

    #[test]
    fn sibling_subquery_scope_is_not_visible() {
        let refs = refs_at("SELECT (SELECT x FROM t9), ^ FROM t1");
        assert_eq!(refs, vec![reference("", "t1", "")]);
    }

    #[test]
    fn derived_table_contributes_its_alias_only() {
        let refs = refs_at("SELECT ^ FROM (SELECT c FROM t9) x");
        assert_eq!(refs, vec![reference("", "", "x")]);
    }

    #[test]
    fn outer_from_after_closing_the_caret_scope() {
        let refs = refs_at("SELECT (SELECT ^ FROM t2) FROM t1");
        assert_eq!(refs, vec![reference("", "t1", ""), reference("", "t2", "")]);
    }

    #[test]
    fn caret_inside_derived_table_sees_outer_scope_and_gets_the_alias() {
        let refs = refs_at("SELECT a FROM t1 JOIN (SELECT ^ FROM t2) x ON t1.a = x.b");
        assert_eq!(
            refs,
            vec![
                reference("", "t1", ""),
                reference("", "", "x"),
                reference("", "t2", ""),
            ]
        );
    }

    #[test]
    fn trigger_subject_table_is_a_reference() {
        let refs = refs_at("CREATE TRIGGER tr BEFORE INSERT ON t1 FOR EACH ROW SET NEW.^");
        assert_eq!(refs, vec![reference("", "t1", "")]);
    }

    #[test]
    fn clause_terminators_end_extraction() {
        let refs = refs_at("SELECT ^ FROM t1 WHERE t2.x = 1 GROUP BY y");
        assert_eq!(refs, vec![reference("", "t1", "")]);
    }

    #[test]
    fn statement_boundaries_are_respected() {
        let refs = refs_at("SELECT a FROM t0; SELECT ^ FROM t1; SELECT b FROM t2");
        assert_eq!(refs, vec![reference("", "t1", "")]);
    }

    #[test]
    fn unbalanced_input_keeps_partial_references() {
        let refs = refs_at("SELECT ^ FROM t1, )");
        assert_eq!(refs, vec![reference("", "t1", "")]);
    }

    #[test]
    fn duplicate_references_collapse_in_snapshot() {
        let refs = refs_at("SELECT a FROM t1 WHERE x IN (SELECT ^ FROM T1)");
        assert_eq!(refs, vec![reference("", "t1", "")]);
    }
}
