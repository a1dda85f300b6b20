//! Database schema definitions

/// SQL to create the chests table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted
/// maximum row again.
pub const CREATE_CHESTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS chests (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    video_title TEXT NOT NULL,
    chest_number INTEGER
)
"#;

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    vec![CREATE_CHESTS_TABLE]
}
