#![allow(dead_code)]

use std::collections::BTreeMap;

use caretscope_core::lexer::TokenInfo;
use caretscope_core::vocab::TokenId;
use caretscope_core::{
    get_code_completion_list, CandidateEngine, CandidatesCollection, CompletionEntry,
    CompletionError, CompletionKind, GrammarConfig, ObjectNamesCache, ProposalRule, SqlParser,
};

/// Candidate engine returning a fixed result, standing in for the ATN-based
/// engine the production parser provides.
pub struct StubEngine {
    pub candidates: CandidatesCollection,
}

impl CandidateEngine for StubEngine {
    fn collect_candidates(
        &self,
        _config: &GrammarConfig,
        _tokens: &[TokenInfo],
        _caret: (usize, usize),
    ) -> Result<CandidatesCollection, CompletionError> {
        Ok(self.candidates.clone())
    }
}

pub struct FailingEngine;

impl CandidateEngine for FailingEngine {
    fn collect_candidates(
        &self,
        _config: &GrammarConfig,
        _tokens: &[TokenInfo],
        _caret: (usize, usize),
    ) -> Result<CandidatesCollection, CompletionError> {
        Err(CompletionError::engine("parser state corrupted"))
    }
}

pub fn candidates_with(
    tokens: &[(TokenId, &[TokenId])],
    rules: &[ProposalRule],
) -> CandidatesCollection {
    let mut candidates = CandidatesCollection::default();
    for (id, follow) in tokens {
        candidates.tokens.insert(*id, follow.to_vec());
    }
    for rule in rules {
        candidates.rules.insert(*rule, Vec::new());
    }
    candidates
}

/// In-memory object-names cache.
#[derive(Default)]
pub struct MockCache {
    schemas: Vec<String>,
    tables: BTreeMap<String, Vec<String>>,
    views: BTreeMap<String, Vec<String>>,
    columns: BTreeMap<(String, String), Vec<String>>,
    functions: BTreeMap<String, Vec<String>>,
    procedures: BTreeMap<String, Vec<String>>,
    udfs: Vec<String>,
    triggers: BTreeMap<(String, String), Vec<String>>,
    events: BTreeMap<String, Vec<String>>,
    engines: Vec<String>,
    logfile_groups: Vec<String>,
    tablespaces: Vec<String>,
    variables: Vec<String>,
    charsets: Vec<String>,
    collations: Vec<String>,
}

impl MockCache {
    fn ensure_schema(&mut self, schema: &str) {
        if !self.schemas.iter().any(|s| s == schema) {
            self.schemas.push(schema.to_string());
        }
    }

    pub fn with_schema(mut self, schema: &str) -> Self {
        self.ensure_schema(schema);
        self
    }

    pub fn with_table(mut self, schema: &str, table: &str, columns: &[&str]) -> Self {
        self.ensure_schema(schema);
        self.tables
            .entry(schema.to_string())
            .or_default()
            .push(table.to_string());
        self.columns.insert(
            (schema.to_string(), table.to_string()),
            columns.iter().map(|c| c.to_string()).collect(),
        );
        self
    }

    pub fn with_view(mut self, schema: &str, view: &str) -> Self {
        self.ensure_schema(schema);
        self.views
            .entry(schema.to_string())
            .or_default()
            .push(view.to_string());
        self
    }

    pub fn with_function(mut self, schema: &str, function: &str) -> Self {
        self.ensure_schema(schema);
        self.functions
            .entry(schema.to_string())
            .or_default()
            .push(function.to_string());
        self
    }

    pub fn with_procedure(mut self, schema: &str, procedure: &str) -> Self {
        self.ensure_schema(schema);
        self.procedures
            .entry(schema.to_string())
            .or_default()
            .push(procedure.to_string());
        self
    }

    pub fn with_udf(mut self, udf: &str) -> Self {
        self.udfs.push(udf.to_string());
        self
    }

    pub fn with_trigger(mut self, schema: &str, table: &str, trigger: &str) -> Self {
        self.ensure_schema(schema);
        self.triggers
            .entry((schema.to_string(), table.to_string()))
            .or_default()
            .push(trigger.to_string());
        self
    }

    pub fn with_event(mut self, schema: &str, event: &str) -> Self {
        self.ensure_schema(schema);
        self.events
            .entry(schema.to_string())
            .or_default()
            .push(event.to_string());
        self
    }

    pub fn with_engines(mut self, engines: &[&str]) -> Self {
        self.engines = engines.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn with_logfile_groups(mut self, groups: &[&str]) -> Self {
        self.logfile_groups = groups.iter().map(|g| g.to_string()).collect();
        self
    }

    pub fn with_tablespaces(mut self, tablespaces: &[&str]) -> Self {
        self.tablespaces = tablespaces.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_variables(mut self, variables: &[&str]) -> Self {
        self.variables = variables.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn with_charsets(mut self, charsets: &[&str]) -> Self {
        self.charsets = charsets.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn with_collations(mut self, collations: &[&str]) -> Self {
        self.collations = collations.iter().map(|c| c.to_string()).collect();
        self
    }
}

fn filtered(names: Option<&Vec<String>>, prefix: &str) -> Vec<String> {
    let prefix = prefix.to_lowercase();
    names
        .map(|names| {
            names
                .iter()
                .filter(|name| name.to_lowercase().starts_with(&prefix))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

impl ObjectNamesCache for MockCache {
    fn matching_schemas(&self, prefix: &str) -> Vec<String> {
        filtered(Some(&self.schemas), prefix)
    }

    fn matching_tables(&self, schema: &str, prefix: &str) -> Vec<String> {
        filtered(self.tables.get(schema), prefix)
    }

    fn matching_views(&self, schema: &str, prefix: &str) -> Vec<String> {
        filtered(self.views.get(schema), prefix)
    }

    fn matching_columns(&self, schema: &str, table: &str, prefix: &str) -> Vec<String> {
        filtered(
            self.columns.get(&(schema.to_string(), table.to_string())),
            prefix,
        )
    }

    fn matching_procedures(&self, schema: &str, prefix: &str) -> Vec<String> {
        filtered(self.procedures.get(schema), prefix)
    }

    fn matching_functions(&self, schema: &str, prefix: &str) -> Vec<String> {
        filtered(self.functions.get(schema), prefix)
    }

    fn matching_udfs(&self, prefix: &str) -> Vec<String> {
        filtered(Some(&self.udfs), prefix)
    }

    fn matching_triggers(&self, schema: &str, table: &str, prefix: &str) -> Vec<String> {
        if table.is_empty() {
            let mut all = Vec::new();
            for ((trigger_schema, _), triggers) in &self.triggers {
                if trigger_schema == schema {
                    all.extend(filtered(Some(triggers), prefix));
                }
            }
            return all;
        }
        filtered(
            self.triggers.get(&(schema.to_string(), table.to_string())),
            prefix,
        )
    }

    fn matching_events(&self, schema: &str, prefix: &str) -> Vec<String> {
        filtered(self.events.get(schema), prefix)
    }

    fn matching_engines(&self, prefix: &str) -> Vec<String> {
        filtered(Some(&self.engines), prefix)
    }

    fn matching_logfile_groups(&self, prefix: &str) -> Vec<String> {
        filtered(Some(&self.logfile_groups), prefix)
    }

    fn matching_tablespaces(&self, prefix: &str) -> Vec<String> {
        filtered(Some(&self.tablespaces), prefix)
    }

    fn matching_variables(&self, prefix: &str) -> Vec<String> {
        filtered(Some(&self.variables), prefix)
    }

    fn matching_charsets(&self, prefix: &str) -> Vec<String> {
        filtered(Some(&self.charsets), prefix)
    }

    fn matching_collations(&self, prefix: &str) -> Vec<String> {
        filtered(Some(&self.collations), prefix)
    }
}

/// Two schemas: `s` with tables t1(a, b) and t2(c), `s1` with table t3(x)
/// and view v1.
pub fn sample_cache() -> MockCache {
    MockCache::default()
        .with_table("s", "t1", &["a", "b"])
        .with_table("s", "t2", &["c"])
        .with_table("s1", "t3", &["x"])
        .with_view("s1", "v1")
}

/// Splits a `^`-marked SQL string into the clean text and the 0-based caret
/// line and column.
pub fn sql_with_caret(marked: &str) -> (String, usize, usize) {
    let offset = marked.find('^').expect("sql must contain a ^ caret marker");
    let before = &marked[..offset];
    let line = before.matches('\n').count();
    let column = offset - before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    (marked.replacen('^', "", 1), line, column)
}

pub fn complete(
    marked_sql: &str,
    candidates: CandidatesCollection,
    cache: &MockCache,
    default_schema: &str,
    uppercase_keywords: bool,
    function_names: &str,
) -> Vec<CompletionEntry> {
    let (sql, line, column) = sql_with_caret(marked_sql);
    let engine = StubEngine { candidates };
    let parser = SqlParser::new(&sql, &engine).expect("input must tokenize");
    get_code_completion_list(
        line,
        column,
        default_schema,
        uppercase_keywords,
        &parser,
        function_names,
        cache,
    )
}

pub fn has(entries: &[CompletionEntry], kind: CompletionKind, text: &str) -> bool {
    entries.iter().any(|e| e.kind == kind && e.text == text)
}

pub fn kinds(entries: &[CompletionEntry]) -> Vec<CompletionKind> {
    entries.iter().map(|e| e.kind).collect()
}

/// Position of a kind in the fixed emission order.
pub fn emission_rank(kind: CompletionKind) -> usize {
    match kind {
        CompletionKind::Keyword => 0,
        CompletionKind::Column => 1,
        CompletionKind::Table => 2,
        CompletionKind::View => 3,
        CompletionKind::Schema => 4,
        CompletionKind::Routine => 5,
        CompletionKind::Trigger => 6,
        CompletionKind::Event => 7,
        CompletionKind::Engine => 8,
        CompletionKind::LogfileGroup => 9,
        CompletionKind::Tablespace => 10,
        CompletionKind::Charset => 11,
        CompletionKind::Collation => 12,
        CompletionKind::UserVariable => 13,
        CompletionKind::Function => 14,
        CompletionKind::SystemVariable => 15,
    }
}
