//! Contract of the external object-names cache.
//!
//! The cache is the only shared state the engine touches. Implementations
//! are expected to be internally thread-safe and may answer with an empty
//! list whenever a lookup cannot be served (cold cache, server unreachable);
//! completion then simply proceeds with fewer entries.
//!
//! The `prefix` parameter is reserved for server-side filtering; the engine
//! currently always passes an empty prefix.

pub trait ObjectNamesCache {
    fn matching_schemas(&self, prefix: &str) -> Vec<String>;
    fn matching_tables(&self, schema: &str, prefix: &str) -> Vec<String>;
    fn matching_views(&self, schema: &str, prefix: &str) -> Vec<String>;
    fn matching_columns(&self, schema: &str, table: &str, prefix: &str) -> Vec<String>;
    fn matching_procedures(&self, schema: &str, prefix: &str) -> Vec<String>;
    fn matching_functions(&self, schema: &str, prefix: &str) -> Vec<String>;
    fn matching_udfs(&self, prefix: &str) -> Vec<String>;
    fn matching_triggers(&self, schema: &str, table: &str, prefix: &str) -> Vec<String>;
    fn matching_events(&self, schema: &str, prefix: &str) -> Vec<String>;
    fn matching_engines(&self, prefix: &str) -> Vec<String>;
    fn matching_logfile_groups(&self, prefix: &str) -> Vec<String>;
    fn matching_tablespaces(&self, prefix: &str) -> Vec<String>;
    fn matching_variables(&self, prefix: &str) -> Vec<String>;
    fn matching_charsets(&self, prefix: &str) -> Vec<String>;
    fn matching_collations(&self, prefix: &str) -> Vec<String>;
}
