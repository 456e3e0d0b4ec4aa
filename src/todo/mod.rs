//! Todo domain models
//!
//! This module contains the todo record shape and its validity rules.
//! It is split into submodules:
//! - `priority`: Priority levels and their display attributes
//! - `record`: Committed records and normalized creation payloads
//! - `draft`: User input, tag sets and draft validation
//! - `due`: Due-date display state derived from the current time

mod draft;
mod due;
mod priority;
mod record;

// Re-export all public types
pub use draft::{TagSet, TodoDraft, ValidationError, normalize_content, validate_and_normalize};
pub use due::{DEFAULT_DUE_SOON_DAYS, DueBadge, DueStatus};
pub use priority::{Priority, PriorityStyle};
pub use record::{DEFAULT_CATEGORY, NewTodo, SUGGESTED_CATEGORIES, TodoRecord};
