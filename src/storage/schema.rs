//! Database schema definitions

/// Pragmas applied to every connection before use.
///
/// SQLite's LIKE folds ASCII case by default; search must be case-sensitive.
pub const CONNECTION_PRAGMAS: &str = "PRAGMA case_sensitive_like = ON;";

/// SQL to create the snippets table
pub const CREATE_SNIPPETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    keyword TEXT PRIMARY KEY,
    message TEXT NOT NULL
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_SNIPPETS_TABLE]
}
