use super::draft::TagSet;
use super::priority::Priority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category assigned when the user does not pick one
pub const DEFAULT_CATEGORY: &str = "general";

/// Categories offered by the creation dialog
///
/// Other values are accepted; this list only drives suggestions.
pub const SUGGESTED_CATEGORIES: [&str; 6] = [
    "general", "work", "personal", "shopping", "health", "learning",
];

/// A committed todo as owned by the store
///
/// Presenters only ever read records; every mutation goes through
/// [`crate::presenter::TodoActions`] to the owning store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoRecord {
    /// Opaque identifier assigned by the store (e.g., "todo-3")
    pub id: String,
    /// Trimmed, non-empty task description
    pub content: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: String,
    /// Optional deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "TagSet::is_empty")]
    pub tags: TagSet,
    /// Set once by the store when the record is created
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for TodoRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            content: String::new(),
            completed: false,
            priority: Priority::default(),
            category: DEFAULT_CATEGORY.to_string(),
            due_date: None,
            tags: TagSet::new(),
            created_at: None,
        }
    }
}

impl TodoRecord {
    /// Build a committed record from a normalized creation payload
    ///
    /// # Arguments
    /// * `id` - Identifier chosen by the store
    /// * `new` - Payload produced by [`super::validate_and_normalize`]
    /// * `created_at` - Creation instant, never changed afterwards
    pub fn from_new(id: impl Into<String>, new: NewTodo, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: new.content,
            completed: false,
            priority: new.priority,
            category: new.category,
            due_date: new.due_date,
            tags: new.tags.map(TagSet::from).unwrap_or_default(),
            created_at: Some(created_at),
        }
    }

    /// Replace the content with an already trimmed, non-empty value
    pub fn apply_edit(&mut self, content: &str) {
        self.content = content.to_string();
    }

    /// Flip the completion flag
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}

/// Normalized payload handed to the `add` callback
///
/// Carries no id; the store assigns one when it persists the todo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTodo {
    pub content: String,
    pub priority: Priority,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Present only when at least one tag survived normalization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}
