use super::TodoActions;
use crate::todo::{
    DEFAULT_CATEGORY, Priority, SUGGESTED_CATEGORIES, TagSet, TodoDraft, normalize_content,
    validate_and_normalize,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Input fields of the dialog that react to Enter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogField {
    Content,
    TagInput,
}

/// The "add todo" dialog
///
/// Closed until [`AddTodoDialog::open`] is called. Draft fields live here
/// until a successful submit or a cancel resets them.
#[derive(Debug, Clone)]
pub struct AddTodoDialog {
    open: bool,
    categories: Vec<String>,
    content: String,
    priority: Priority,
    category: String,
    due_date: Option<DateTime<Utc>>,
    tags: TagSet,
    tag_input: String,
}

impl Default for AddTodoDialog {
    fn default() -> Self {
        Self::new(SUGGESTED_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}

impl AddTodoDialog {
    /// Create a closed dialog offering the given category suggestions
    pub fn new(categories: Vec<String>) -> Self {
        Self {
            open: false,
            categories,
            content: String::new(),
            priority: Priority::default(),
            category: DEFAULT_CATEGORY.to_string(),
            due_date: None,
            tags: TagSet::new(),
            tag_input: String::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Category suggestions; other values are still accepted
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Whether the drafted category is one of the suggestions (ignoring case)
    pub fn is_suggested_category(&self) -> bool {
        let category = self.category.trim();
        self.categories
            .iter()
            .any(|c| c.trim().eq_ignore_ascii_case(category))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>) {
        self.due_date = due_date;
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tag_input = text.into();
    }

    /// Whether the tag button is enabled
    pub fn can_commit_tag(&self) -> bool {
        !self.tag_input.trim().is_empty()
    }

    /// Move the tag input into the tag set
    ///
    /// Blank or already present tags are ignored and the input is left as
    /// typed. Never touches the content field.
    ///
    /// # Returns
    /// `true` if a tag was added and the input cleared
    pub fn commit_tag(&mut self) -> bool {
        if self.tags.insert(&self.tag_input) {
            self.tag_input.clear();
            true
        } else {
            false
        }
    }

    /// Drop a tag from the draft (clicking its badge)
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        self.open && normalize_content(&self.content).is_ok()
    }

    /// Snapshot of the current draft fields
    pub fn draft(&self) -> TodoDraft {
        TodoDraft {
            content: self.content.clone(),
            priority: Some(self.priority),
            category: Some(self.category.clone()),
            due_date: self.due_date,
            tags: self.tags.as_slice().to_vec(),
        }
    }

    /// Validate the draft and hand it to `add`
    ///
    /// On success the draft is reset and the dialog closes. On failure
    /// nothing changes and `add` is not invoked.
    ///
    /// # Returns
    /// `true` if `add` was invoked
    pub fn submit(&mut self, actions: &mut dyn TodoActions) -> bool {
        if !self.open {
            return false;
        }
        match validate_and_normalize(&self.draft()) {
            Ok(todo) => {
                debug!(content = %todo.content, "submit new todo");
                actions.add(todo);
                self.reset();
                self.open = false;
                true
            }
            Err(e) => {
                debug!(error = %e, "submit blocked");
                false
            }
        }
    }

    /// Discard the draft and close
    pub fn cancel(&mut self) {
        self.reset();
        self.open = false;
    }

    /// Enter pressed in one of the inputs
    ///
    /// Enter in the tag input commits the tag; anywhere else it submits.
    ///
    /// # Returns
    /// `true` if a tag was added or `add` was invoked
    pub fn handle_enter(&mut self, field: DialogField, actions: &mut dyn TodoActions) -> bool {
        match field {
            DialogField::TagInput => self.commit_tag(),
            DialogField::Content => self.submit(actions),
        }
    }

    fn reset(&mut self) {
        self.content.clear();
        self.priority = Priority::default();
        self.category = DEFAULT_CATEGORY.to_string();
        self.due_date = None;
        self.tags.clear();
        self.tag_input.clear();
    }
}
