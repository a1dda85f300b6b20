//! Chest entries - the rows of the `chests` table
//!
//! Also holds the menu actions offered by the session, since they are the
//! only operations that ever touch an entry.

use regex::Regex;
use std::sync::OnceLock;

/// Count assigned to a freshly added entry
pub const DEFAULT_CHEST_COUNT: i64 = 0;

static TITLE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// One tracked video and its chest count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChestEntry {
    /// Assigned by storage, never reused after deletion
    pub id: i64,
    pub video_title: String,
    /// Nullable in storage; rendered as `null` when absent
    pub chest_number: Option<i64>,
}

impl ChestEntry {
    /// Display cells in column order
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.video_title.clone(),
            self.chest_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| "null".to_string()),
        ]
    }
}

/// All rows of the table together with the column names reported by the query.
#[derive(Debug, Clone, Default)]
pub struct ChestTable {
    pub columns: Vec<String>,
    pub entries: Vec<ChestEntry>,
}

impl ChestTable {
    /// Data rows as display strings (header excluded)
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.entries.iter().map(ChestEntry::cells).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: i64) -> Option<&ChestEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Check a video title: one or more letters, digits, `_`, `.` or `-`.
pub fn is_valid_title(title: &str) -> bool {
    let pattern = TITLE_PATTERN.get_or_init(|| {
        Regex::new(r"^[\w.\-]+$").expect("title pattern is valid")
    });
    pattern.is_match(title)
}

/// Actions offered by the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Add,
    UpdateCount,
    Delete,
    Exit,
}

impl MenuAction {
    /// Menu code typed by the user
    pub fn code(&self) -> i64 {
        match self {
            MenuAction::Add => 1,
            MenuAction::UpdateCount => 2,
            MenuAction::Delete => 3,
            MenuAction::Exit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Add => "Add a new entry",
            MenuAction::UpdateCount => "Update a chest count",
            MenuAction::Delete => "Delete an entry",
            MenuAction::Exit => "Exit",
        }
    }

    /// Get all actions in menu order
    pub fn all() -> &'static [MenuAction] {
        &[
            MenuAction::Add,
            MenuAction::UpdateCount,
            MenuAction::Delete,
            MenuAction::Exit,
        ]
    }

    pub fn from_code(code: i64) -> Option<MenuAction> {
        Self::all().iter().copied().find(|a| a.code() == code)
    }

    /// Ordered `(code, label)` pairs for the menu prompt
    pub fn options() -> Vec<(i64, &'static str)> {
        Self::all().iter().map(|a| (a.code(), a.label())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_codes_roundtrip() {
        for action in MenuAction::all() {
            assert_eq!(MenuAction::from_code(action.code()), Some(*action));
        }
        assert_eq!(MenuAction::from_code(5), None);
        assert_eq!(MenuAction::from_code(0), None);
    }

    #[test]
    fn test_menu_options_order() {
        let codes: Vec<i64> = MenuAction::options().iter().map(|(c, _)| *c).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
        assert_eq!(MenuAction::options()[3].1, "Exit");
    }

    #[test]
    fn test_title_validation() {
        assert!(is_valid_title("run1"));
        assert!(is_valid_title("My.Video-1"));
        assert!(is_valid_title("boss_fight_02"));
        assert!(!is_valid_title("My Video"));
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("chest#3"));
        assert!(!is_valid_title("a/b"));
    }

    #[test]
    fn test_null_count_renders_as_null() {
        let entry = ChestEntry {
            id: 7,
            video_title: "legacy".to_string(),
            chest_number: None,
        };
        assert_eq!(entry.cells(), vec!["7", "legacy", "null"]);
    }
}
