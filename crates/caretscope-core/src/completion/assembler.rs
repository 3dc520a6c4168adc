//! Assembly of the final completion list.
//!
//! Token candidates become keyword (or runtime-function) entries, rule
//! candidates become object-name entries via cache lookups, and the
//! per-kind groups are emitted in a fixed order, most likely ones first.

use std::collections::BTreeSet;
use std::collections::HashSet;

use tracing::debug;

use crate::cache::ObjectNamesCache;
use crate::parser::SqlParser;
use crate::scanner::Scanner;
use crate::types::{names_equal, CompletionEntry, CompletionKind, ObjectFlags, QueryType, TableReference};
use crate::vocab::{token, Vocabulary};

use super::candidates::{self, ProposalRule};
use super::qualifier::{determine_qualifier, determine_schema_table_qualifier};
use super::set::CompletionSet;

/// One set per object type. Sorting happens per set; concatenation order is
/// fixed, most likely groups first and inner objects before outer ones
/// (columns before tables etc.).
#[derive(Default)]
struct EntrySets {
    keywords: CompletionSet,
    columns: CompletionSet,
    tables: CompletionSet,
    views: CompletionSet,
    schemas: CompletionSet,
    functions: CompletionSet,
    procedures: CompletionSet,
    triggers: CompletionSet,
    // Not fed from the cache yet.
    indexes: CompletionSet,
    events: CompletionSet,
    users: CompletionSet,
    engines: CompletionSet,
    plugins: CompletionSet,
    logfile_groups: CompletionSet,
    tablespaces: CompletionSet,
    charsets: CompletionSet,
    collations: CompletionSet,
    user_vars: CompletionSet,
    runtime_functions: CompletionSet,
    system_vars: CompletionSet,
}

impl EntrySets {
    fn into_entries(self) -> Vec<CompletionEntry> {
        let groups = [
            self.keywords,
            self.columns,
            self.tables,
            self.views,
            self.schemas,
            self.functions,
            self.procedures,
            self.triggers,
            self.indexes,
            self.events,
            self.users,
            self.engines,
            self.plugins,
            self.logfile_groups,
            self.tablespaces,
            self.charsets,
            self.collations,
            self.user_vars,
            self.runtime_functions,
            self.system_vars,
        ];

        let mut seen: HashSet<(CompletionKind, String)> = HashSet::new();
        let mut result = Vec::new();
        for group in groups {
            for entry in group.into_sorted() {
                if seen.insert((entry.kind, entry.text.to_lowercase())) {
                    result.push(entry);
                }
            }
        }
        result
    }
}

/// Strips the display-name decoration: the `_SYMBOL` suffix from keyword
/// names, surrounding quotes from everything else.
fn strip_display_name(name: &str) -> &str {
    if let Some(stripped) = name.strip_suffix("_SYMBOL") {
        return stripped;
    }
    name.trim_matches('\'')
}

fn insert_schemas(cache: &dyn ObjectNamesCache, set: &mut CompletionSet, typed_part: &str) {
    for schema in cache.matching_schemas(typed_part) {
        set.insert(CompletionKind::Schema, schema);
    }
}

fn insert_tables(
    cache: &dyn ObjectNamesCache,
    set: &mut CompletionSet,
    schemas: &BTreeSet<String>,
    typed_part: &str,
) {
    for schema in schemas {
        for table in cache.matching_tables(schema, typed_part) {
            set.insert(CompletionKind::Table, table);
        }
    }
}

fn insert_views(
    cache: &dyn ObjectNamesCache,
    set: &mut CompletionSet,
    schemas: &BTreeSet<String>,
    typed_part: &str,
) {
    for schema in schemas {
        for view in cache.matching_views(schema, typed_part) {
            set.insert(CompletionKind::View, view);
        }
    }
}

fn insert_columns(
    cache: &dyn ObjectNamesCache,
    set: &mut CompletionSet,
    schemas: &BTreeSet<String>,
    tables: &BTreeSet<String>,
    typed_part: &str,
) {
    for schema in schemas {
        for table in tables {
            for column in cache.matching_columns(schema, table, typed_part) {
                set.insert(CompletionKind::Column, column);
            }
        }
    }
}

struct RuleContext<'a> {
    vocab: &'static Vocabulary,
    cache: &'a dyn ObjectNamesCache,
    default_schema: &'a str,
    function_names: &'a str,
    query_type: QueryType,
    references: &'a [TableReference],
    case_sensitive: bool,
}

/// Computes the completion list for the given caret (0-based line and
/// column). Always returns a (possibly empty) list; the only genuinely
/// fatal condition, a candidate-engine failure, is logged and yields an
/// empty result.
pub fn get_code_completion_list(
    caret_line: usize,
    caret_column: usize,
    default_schema: &str,
    uppercase_keywords: bool,
    parser: &SqlParser<'_>,
    function_names: &str,
    cache: &dyn ObjectNamesCache,
) -> Vec<CompletionEntry> {
    debug!(caret_line, caret_column, "invoking code completion");

    let collected = match candidates::collect(parser, caret_line, caret_column) {
        Ok(collected) => collected,
        Err(err) => {
            debug!("candidate collection failed: {err}");
            return Vec::new();
        }
    };

    let vocab = parser.vocabulary();
    let mut sets = EntrySets::default();

    for (token_id, follow) in &collected.candidates.tokens {
        let mut entry = strip_display_name(vocab.display_name(*token_id)).to_string();

        if follow.first() == Some(&token::OPEN_PAR_SYMBOL) {
            sets.runtime_functions
                .insert(CompletionKind::Function, format!("{}()", entry.to_lowercase()));
            continue;
        }

        for follow_id in follow {
            entry.push(' ');
            entry.push_str(strip_display_name(vocab.display_name(*follow_id)));
        }
        if !uppercase_keywords {
            entry = entry.to_lowercase();
        }
        sets.keywords.insert(CompletionKind::Keyword, entry);

        for synonym in vocab.synonyms(*token_id) {
            let spelled = if uppercase_keywords {
                (*synonym).to_string()
            } else {
                synonym.to_lowercase()
            };
            sets.keywords.insert(CompletionKind::Keyword, spelled);
        }
    }

    let ctx = RuleContext {
        vocab,
        cache,
        default_schema,
        function_names,
        query_type: parser.query_type(),
        references: &collected.references,
        case_sensitive: parser.options().case_sensitive_identifiers,
    };

    // Every rule handler starts from the exact caret position.
    let mut scanner = Scanner::new(parser.tokens());
    scanner.advance_to(caret_line + 1, caret_column);

    for rule in collected.candidates.rules.keys() {
        scanner.scoped(|scanner| handle_rule(*rule, scanner, &mut sets, &ctx));
    }

    sets.into_entries()
}

fn handle_rule(
    rule: ProposalRule,
    scanner: &mut Scanner<'_>,
    sets: &mut EntrySets,
    ctx: &RuleContext<'_>,
) {
    match rule {
        ProposalRule::RuntimeFunctionCall => {
            debug!("adding runtime function names");
            for name in ctx.function_names.split_whitespace() {
                sets.runtime_functions
                    .insert(CompletionKind::Function, format!("{name}()"));
            }
        }

        ProposalRule::FunctionRef | ProposalRule::FunctionCall => {
            let (flags, mut qualifier) = determine_qualifier(scanner, ctx.vocab);

            if qualifier.is_empty() {
                debug!("adding user defined function names from cache");
                for udf in ctx.cache.matching_udfs("") {
                    sets.runtime_functions
                        .insert(CompletionKind::Function, format!("{udf}()"));
                }
            }

            debug!("adding function names from cache");
            if flags.contains(ObjectFlags::SHOW_FIRST) {
                insert_schemas(ctx.cache, &mut sets.schemas, "");
            }
            if flags.contains(ObjectFlags::SHOW_SECOND) {
                if qualifier.is_empty() {
                    qualifier = ctx.default_schema.to_string();
                }
                for function in ctx.cache.matching_functions(&qualifier, "") {
                    sets.functions.insert(CompletionKind::Routine, function);
                }
            }
        }

        ProposalRule::ProcedureRef => {
            debug!("adding procedure names from cache");
            let (flags, mut qualifier) = determine_qualifier(scanner, ctx.vocab);

            if flags.contains(ObjectFlags::SHOW_FIRST) {
                insert_schemas(ctx.cache, &mut sets.schemas, "");
            }
            if flags.contains(ObjectFlags::SHOW_SECOND) {
                if qualifier.is_empty() {
                    qualifier = ctx.default_schema.to_string();
                }
                for procedure in ctx.cache.matching_procedures(&qualifier, "") {
                    sets.procedures.insert(CompletionKind::Routine, procedure);
                }
            }
        }

        ProposalRule::EngineRef => {
            debug!("adding engine names");
            for engine in ctx.cache.matching_engines("") {
                sets.engines.insert(CompletionKind::Engine, engine);
            }
        }

        ProposalRule::SchemaRef => {
            debug!("adding schema names from cache");
            insert_schemas(ctx.cache, &mut sets.schemas, "");
        }

        ProposalRule::TableRefWithWildcard => {
            // The id.id.* form used in multi-table delete. Handled like a
            // column reference, with tables/views in place of columns.
            debug!("adding table + view names from cache");
            let (flags, schema, _table) = determine_schema_table_qualifier(scanner, ctx.vocab);

            if flags.contains(ObjectFlags::SHOW_SCHEMAS) {
                insert_schemas(ctx.cache, &mut sets.schemas, "");
            }
            let mut schemas = BTreeSet::new();
            schemas.insert(if schema.is_empty() {
                ctx.default_schema.to_string()
            } else {
                schema
            });
            if flags.contains(ObjectFlags::SHOW_TABLES) {
                insert_tables(ctx.cache, &mut sets.tables, &schemas, "");
                insert_views(ctx.cache, &mut sets.views, &schemas, "");
            }
        }

        ProposalRule::TableRef | ProposalRule::FilterTableRef | ProposalRule::TableRefNoDb => {
            debug!("adding table + view names from cache");
            let (flags, qualifier) = determine_qualifier(scanner, ctx.vocab);

            if flags.contains(ObjectFlags::SHOW_FIRST) {
                insert_schemas(ctx.cache, &mut sets.schemas, "");
            }
            if flags.contains(ObjectFlags::SHOW_SECOND) {
                let mut schemas = BTreeSet::new();
                schemas.insert(if qualifier.is_empty() {
                    ctx.default_schema.to_string()
                } else {
                    qualifier
                });
                insert_tables(ctx.cache, &mut sets.tables, &schemas, "");
                insert_views(ctx.cache, &mut sets.views, &schemas, "");
            }
        }

        ProposalRule::TableWild | ProposalRule::ColumnRef | ProposalRule::ColumnInternalRef => {
            column_ref(rule, scanner, sets, ctx);
        }

        ProposalRule::TriggerRef => {
            // Trigger references are table.trigger pairs; only triggers of
            // the current schema are offered.
            debug!("adding trigger names from cache");
            let (flags, qualifier) = determine_qualifier(scanner, ctx.vocab);

            let mut schemas = BTreeSet::new();
            schemas.insert(ctx.default_schema.to_string());

            if flags.contains(ObjectFlags::SHOW_FIRST) {
                insert_tables(ctx.cache, &mut sets.schemas, &schemas, "");
            }
            if flags.contains(ObjectFlags::SHOW_SECOND) {
                for trigger in ctx
                    .cache
                    .matching_triggers(ctx.default_schema, &qualifier, "")
                {
                    sets.triggers.insert(CompletionKind::Trigger, trigger);
                }
            }
        }

        ProposalRule::ViewRef => {
            // View refs without table references, e.g. DROP VIEW ...
            debug!("adding view names from cache");
            let (flags, qualifier) = determine_qualifier(scanner, ctx.vocab);

            if flags.contains(ObjectFlags::SHOW_FIRST) {
                insert_schemas(ctx.cache, &mut sets.schemas, "");
            }
            if flags.contains(ObjectFlags::SHOW_SECOND) {
                let mut schemas = BTreeSet::new();
                schemas.insert(if qualifier.is_empty() {
                    ctx.default_schema.to_string()
                } else {
                    qualifier
                });
                insert_views(ctx.cache, &mut sets.views, &schemas, "");
            }
        }

        ProposalRule::LogfileGroupRef => {
            debug!("adding logfile group names from cache");
            for group in ctx.cache.matching_logfile_groups("") {
                sets.logfile_groups
                    .insert(CompletionKind::LogfileGroup, group);
            }
        }

        ProposalRule::TablespaceRef => {
            debug!("adding tablespace names from cache");
            for tablespace in ctx.cache.matching_tablespaces("") {
                sets.tablespaces
                    .insert(CompletionKind::Tablespace, tablespace);
            }
        }

        ProposalRule::UserVariable => {
            debug!("adding user variables");
            sets.user_vars
                .insert(CompletionKind::UserVariable, "<user variable>");
        }

        ProposalRule::LabelRef => {
            debug!("adding label references");
            sets.user_vars
                .insert(CompletionKind::UserVariable, "<block labels>");
        }

        ProposalRule::SystemVariable => {
            debug!("adding system variables");
            for variable in ctx.cache.matching_variables("") {
                sets.system_vars
                    .insert(CompletionKind::SystemVariable, variable);
            }
        }

        ProposalRule::CharsetName => {
            debug!("adding charsets");
            for charset in ctx.cache.matching_charsets("") {
                sets.charsets.insert(CompletionKind::Charset, charset);
            }
        }

        ProposalRule::CollationName => {
            debug!("adding collations");
            for collation in ctx.cache.matching_collations("") {
                sets.collations.insert(CompletionKind::Collation, collation);
            }
        }

        ProposalRule::EventRef => {
            debug!("adding events");
            let (flags, mut qualifier) = determine_qualifier(scanner, ctx.vocab);

            if flags.contains(ObjectFlags::SHOW_FIRST) {
                insert_schemas(ctx.cache, &mut sets.schemas, "");
            }
            if flags.contains(ObjectFlags::SHOW_SECOND) {
                if qualifier.is_empty() {
                    qualifier = ctx.default_schema.to_string();
                }
                for event in ctx.cache.matching_events(&qualifier, "") {
                    sets.events.insert(CompletionKind::Event, event);
                }
            }
        }

        ProposalRule::ServerRef
        | ProposalRule::ParameterName
        | ProposalRule::ProcedureName
        | ProposalRule::Identifier
        | ProposalRule::LabelIdentifier => {}
    }
}

/// Column-reference completion. Restricts what is shown to the smallest set
/// possible: with table references in scope, only their columns; the default
/// schema only when nothing narrower applies.
fn column_ref(
    rule: ProposalRule,
    scanner: &mut Scanner<'_>,
    sets: &mut EntrySets,
    ctx: &RuleContext<'_>,
) {
    debug!("adding column names from cache");
    let (flags, schema, table) = determine_schema_table_qualifier(scanner, ctx.vocab);

    if flags.contains(ObjectFlags::SHOW_SCHEMAS) {
        insert_schemas(ctx.cache, &mut sets.schemas, "");
    }

    // With an explicit schema, list only that schema's objects. Without one,
    // use the schemas of the table references; failing that, the default.
    let mut schemas: BTreeSet<String> = BTreeSet::new();
    if !schema.is_empty() {
        schemas.insert(schema.clone());
    } else {
        for reference in ctx.references {
            if !reference.schema.is_empty() {
                schemas.insert(reference.schema.clone());
            }
        }
    }
    if schemas.is_empty() {
        schemas.insert(ctx.default_schema.to_string());
    }

    if flags.contains(ObjectFlags::SHOW_TABLES) {
        insert_tables(ctx.cache, &mut sets.tables, &schemas, "");
        if rule == ProposalRule::ColumnRef {
            insert_views(ctx.cache, &mut sets.views, &schemas, "");

            // Aliased references are shown by their alias.
            for reference in ctx.references {
                let visible = (schema.is_empty() && reference.schema.is_empty())
                    || schemas.contains(&reference.schema);
                if visible {
                    let text = if reference.alias.is_empty() {
                        reference.table.clone()
                    } else {
                        reference.alias.clone()
                    };
                    if !text.is_empty() {
                        sets.tables.insert(CompletionKind::Table, text);
                    }
                }
            }
        }
    }

    if flags.contains(ObjectFlags::SHOW_COLUMNS) {
        // Equal schema and table means a single dot was typed; it is unknown
        // which of the two the text names, so include the default schema.
        if schema == table {
            schemas.insert(ctx.default_schema.to_string());
        }

        // With a table qualifier, only its columns (the qualifier may be an
        // alias). Without one, columns of all referenced tables; no
        // references, no columns.
        let mut tables: BTreeSet<String> = BTreeSet::new();
        if !table.is_empty() {
            tables.insert(table.clone());
            for reference in ctx.references {
                if names_equal(&table, &reference.alias, ctx.case_sensitive)
                    && !reference.table.is_empty()
                {
                    tables.insert(reference.table.clone());
                }
            }
        } else if !ctx.references.is_empty() && rule == ProposalRule::ColumnRef {
            for reference in ctx.references {
                if !reference.table.is_empty() {
                    tables.insert(reference.table.clone());
                }
            }
        }

        if !tables.is_empty() {
            insert_columns(ctx.cache, &mut sets.columns, &schemas, &tables, "");
        }

        // Trigger bodies: the OLD and NEW qualifiers see the columns of the
        // trigger's subject table, which is the first collected reference.
        if ctx.query_type == QueryType::CreateTrigger
            && !ctx.references.is_empty()
            && (table.eq_ignore_ascii_case("old") || table.eq_ignore_ascii_case("new"))
        {
            let mut trigger_tables = BTreeSet::new();
            trigger_tables.insert(ctx.references[0].table.clone());
            insert_columns(ctx.cache, &mut sets.columns, &schemas, &trigger_tables, "");
        }
    }
}
