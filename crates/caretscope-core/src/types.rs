//! Shared data model of the completion engine.

use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Classification of a completion entry. The discriminants are stable wire
/// identifiers; consumers map them to icons.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum CompletionKind {
    Keyword = 0,
    Schema = 1,
    Table = 2,
    View = 3,
    Column = 4,
    Function = 5,
    Routine = 6,
    Trigger = 7,
    Event = 8,
    Engine = 9,
    LogfileGroup = 10,
    Tablespace = 11,
    SystemVariable = 12,
    UserVariable = 13,
    Charset = 14,
    Collation = 15,
}

/// One entry of the final completion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionEntry {
    pub kind: CompletionKind,
    pub text: String,
}

impl CompletionEntry {
    pub fn new(kind: CompletionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// A table appearing in a `FROM` clause, including its alias if any. All
/// parts may be empty; the alias takes precedence over the table name when
/// presenting the reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableReference {
    pub schema: String,
    pub table: String,
    pub alias: String,
}

/// What a qualified-identifier analysis decided must be offered at the caret.
///
/// The schema/table/column bits describe 3-part identifiers, the first/second
/// bits 2-part identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectFlags(u8);

impl ObjectFlags {
    pub const SHOW_SCHEMAS: ObjectFlags = ObjectFlags(1);
    pub const SHOW_TABLES: ObjectFlags = ObjectFlags(1 << 1);
    pub const SHOW_COLUMNS: ObjectFlags = ObjectFlags(1 << 2);
    pub const SHOW_FIRST: ObjectFlags = ObjectFlags(1 << 3);
    pub const SHOW_SECOND: ObjectFlags = ObjectFlags(1 << 4);

    pub fn contains(self, other: ObjectFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ObjectFlags {
    type Output = ObjectFlags;

    fn bitor(self, rhs: ObjectFlags) -> ObjectFlags {
        ObjectFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ObjectFlags {
    fn bitor_assign(&mut self, rhs: ObjectFlags) {
        self.0 |= rhs.0;
    }
}

/// Coarse classification of the statement the caret sits in, derived from
/// its leading tokens. Only [`QueryType::CreateTrigger`] changes completion
/// behavior (the `OLD`/`NEW` column qualifiers); the rest is informational.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryType {
    #[default]
    Unknown,
    Select,
    Insert,
    Update,
    Delete,
    CreateSchema,
    CreateTable,
    CreateView,
    CreateTrigger,
    CreateRoutine,
    CreateEvent,
}

/// Tunables of a completion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompletionOptions {
    /// Compare schema/table/alias identifiers case-sensitively. Off by
    /// default, matching the common server configuration.
    pub case_sensitive_identifiers: bool,
}

pub(crate) fn names_equal(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.eq_ignore_ascii_case(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_flags_combine() {
        let flags = ObjectFlags::SHOW_FIRST | ObjectFlags::SHOW_SECOND;
        assert!(flags.contains(ObjectFlags::SHOW_FIRST));
        assert!(flags.contains(ObjectFlags::SHOW_SECOND));
        assert!(!flags.contains(ObjectFlags::SHOW_COLUMNS));
        assert!(!flags.is_empty());
        assert!(ObjectFlags::default().is_empty());
    }

    #[test]
    fn entry_serialization_round_trip() {
        let entry = CompletionEntry::new(CompletionKind::LogfileGroup, "lg_1");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"kind":"logfileGroup","text":"lg_1"}"#);
        let back: CompletionEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn name_comparison_honors_case_knob() {
        assert!(names_equal("Orders", "orders", false));
        assert!(!names_equal("Orders", "orders", true));
    }
}
