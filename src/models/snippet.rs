use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Category name used for grouping when a snippet carries no category of
/// its own. Only applied at display/index time; the stored value stays
/// whatever the user entered.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A titled code fragment. The title doubles as the primary key in the
/// store, so two snippets with the same title cannot coexist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub title: String,

    /// Free text, may be empty ("rust", "python", ...).
    #[serde(default)]
    pub language: String,

    /// Comma-separated free text, kept verbatim rather than parsed into a set.
    #[serde(default)]
    pub tags: String,

    pub code: String,

    /// Folder-like grouping name, may be empty.
    #[serde(default)]
    pub category: String,

    /// Milliseconds since epoch, stamped once at creation.
    #[serde(default, rename = "createdAt")]
    pub created_at: i64,
}

impl Snippet {
    pub fn new(
        title: impl Into<String>,
        language: impl Into<String>,
        tags: impl Into<String>,
        code: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            language: language.into(),
            tags: tags.into(),
            code: code.into(),
            category: category.into(),
            created_at: Utc::now().timestamp_millis(),
        }
    }

    /// The category this snippet is grouped under, falling back to
    /// [`UNCATEGORIZED`] when the field is empty.
    pub fn effective_category(&self) -> &str {
        if self.category.is_empty() {
            UNCATEGORIZED
        } else {
            &self.category
        }
    }

    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stamps_creation_time() {
        let before = Utc::now().timestamp_millis();
        let snippet = Snippet::new("Quicksort", "rust", "", "fn sort() {}", "Algorithms");
        let after = Utc::now().timestamp_millis();

        assert!(snippet.created_at >= before);
        assert!(snippet.created_at <= after);
    }

    #[test]
    fn creation_times_are_non_decreasing() {
        let first = Snippet::new("a", "", "", "x", "");
        let second = Snippet::new("b", "", "", "y", "");
        assert!(second.created_at >= first.created_at);
    }

    #[test]
    fn effective_category_falls_back_when_empty() {
        let with = Snippet::new("a", "", "", "x", "Web");
        let without = Snippet::new("b", "", "", "y", "");

        assert_eq!(with.effective_category(), "Web");
        assert_eq!(without.effective_category(), UNCATEGORIZED);
        // The stored field is left untouched.
        assert_eq!(without.category, "");
    }
}
