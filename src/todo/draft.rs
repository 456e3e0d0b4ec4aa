use super::priority::Priority;
use super::record::{DEFAULT_CATEGORY, NewTodo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a draft cannot be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Content is empty or whitespace-only
    #[error("content must not be empty")]
    EmptyContent,
}

impl ValidationError {
    /// Name of the draft field that failed
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyContent => "content",
        }
    }
}

/// Ordered set of tags
///
/// Every tag is trimmed and non-empty, no value appears twice (case-sensitive),
/// and the first-seen order is kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate tag
    ///
    /// The candidate is trimmed first. Empty candidates and values already in
    /// the set are ignored.
    ///
    /// # Returns
    /// `true` if the tag was added
    pub fn insert(&mut self, candidate: &str) -> bool {
        let tag = candidate.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    /// Remove a tag, returning whether it was present
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for candidate in iter {
            set.insert(candidate.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        tags.into_iter().collect()
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// User-entered, not yet validated todo input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoDraft {
    /// Raw description as typed
    pub content: String,
    /// `None` falls back to [`Priority::Medium`]
    pub priority: Option<Priority>,
    /// `None` falls back to [`DEFAULT_CATEGORY`]
    pub category: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    /// Raw tag candidates, possibly blank or repeated
    pub tags: Vec<String>,
}

/// Trim content, rejecting whitespace-only input
pub fn normalize_content(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyContent);
    }
    Ok(trimmed)
}

/// Validate a draft and produce the payload for the `add` callback
///
/// Content is trimmed and must not be empty. Tags are trimmed, blank ones
/// dropped and duplicates removed in first-seen order; the tag list is left
/// out entirely when nothing remains. Priority and category fall back to
/// their defaults when unset.
///
/// # Arguments
/// * `draft` - The user input to check
///
/// # Returns
/// The normalized payload, or the validation error for the failing field
pub fn validate_and_normalize(draft: &TodoDraft) -> Result<NewTodo, ValidationError> {
    let content = normalize_content(&draft.content)?;
    let tags: TagSet = draft.tags.iter().collect();

    Ok(NewTodo {
        content: content.to_string(),
        priority: draft.priority.unwrap_or_default(),
        category: draft
            .category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        due_date: draft.due_date,
        tags: (!tags.is_empty()).then(|| tags.into_vec()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(content: &str) -> TodoDraft {
        TodoDraft {
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_and_whitespace_content_rejected() {
        for content in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(
                validate_and_normalize(&draft(content)),
                Err(ValidationError::EmptyContent)
            );
        }
        assert_eq!(ValidationError::EmptyContent.field(), "content");
    }

    #[test]
    fn test_content_is_trimmed() {
        let new = validate_and_normalize(&draft("  Buy milk \n")).unwrap();
        assert_eq!(new.content, "Buy milk");
        assert_eq!(new.priority, Priority::Medium);
        assert_eq!(new.category, "general");
        assert_eq!(new.tags, None);
    }

    #[test]
    fn test_tags_deduplicated_in_first_seen_order() {
        let mut d = draft("Plant trees");
        d.tags = vec!["eco".into(), "eco".into(), "green".into()];
        let new = validate_and_normalize(&d).unwrap();
        assert_eq!(new.tags, Some(vec!["eco".to_string(), "green".to_string()]));
    }

    #[test]
    fn test_tag_dedup_is_case_sensitive_and_trims() {
        let mut d = draft("Read");
        d.tags = vec![" Eco".into(), "eco ".into(), "eco".into(), "  ".into()];
        let new = validate_and_normalize(&d).unwrap();
        assert_eq!(new.tags, Some(vec!["Eco".to_string(), "eco".to_string()]));
    }

    #[test]
    fn test_blank_tags_only_are_omitted() {
        let mut d = draft("Read");
        d.tags = vec!["".into(), "   ".into()];
        assert_eq!(validate_and_normalize(&d).unwrap().tags, None);
    }

    #[test]
    fn test_explicit_priority_and_category_kept() {
        let mut d = draft("Call supplier");
        d.priority = Some(Priority::High);
        d.category = Some("gardening".into());
        let new = validate_and_normalize(&d).unwrap();
        assert_eq!(new.priority, Priority::High);
        assert_eq!(new.category, "gardening");
    }

    #[test]
    fn test_tag_set_insert_and_remove() {
        let mut tags = TagSet::new();
        assert!(tags.insert(" work "));
        assert!(!tags.insert("work"));
        assert!(!tags.insert(""));
        assert!(tags.insert("home"));
        assert_eq!(tags.as_slice(), ["work", "home"]);

        assert!(tags.remove("work"));
        assert!(!tags.remove("work"));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_tag_set_deserialize_normalizes() {
        #[derive(Deserialize)]
        struct Wrapper {
            tags: TagSet,
        }
        let w: Wrapper = toml::from_str(r#"tags = ["a", "a", " ", "b"]"#).unwrap();
        assert_eq!(w.tags.as_slice(), ["a", "b"]);
    }
}
