use super::TodoActions;
use crate::formatting;
use crate::todo::{DueStatus, Priority, PriorityStyle, TodoRecord, normalize_content};
use chrono::{DateTime, Duration, TimeZone};
use std::fmt::Display;
use tracing::debug;

/// Keys the inline editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    /// Commit the edit buffer
    Enter,
    /// Discard the edit buffer
    Escape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ItemMode {
    Viewing,
    Editing { buffer: String },
}

/// Presenter for a single record
///
/// Holds the last record supplied by the caller and the transient edit
/// buffer. Starts in viewing mode.
#[derive(Debug, Clone)]
pub struct TodoItemPresenter {
    record: TodoRecord,
    mode: ItemMode,
}

/// Display model of one record at a given instant
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub id: String,
    /// Content as last supplied by the store
    pub content: String,
    /// Edit buffer while the inline editor is open
    pub editing: Option<String>,
    pub completed: bool,
    pub priority: Priority,
    pub priority_style: PriorityStyle,
    pub category: String,
    pub tags: Vec<String>,
    pub due: DueStatus,
    /// Due date with its badge prefix (e.g., "Overdue: Jun 9, 2025")
    pub due_label: Option<String>,
    /// e.g., "Created Jun 1, 2025 at 9:30 AM"
    pub created_label: Option<String>,
}

impl TodoItemPresenter {
    pub fn new(record: TodoRecord) -> Self {
        Self {
            record,
            mode: ItemMode::Viewing,
        }
    }

    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn record(&self) -> &TodoRecord {
        &self.record
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, ItemMode::Editing { .. })
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        match &self.mode {
            ItemMode::Editing { buffer } => Some(buffer),
            ItemMode::Viewing => None,
        }
    }

    /// Re-render with data re-supplied by the caller
    ///
    /// An open edit buffer is kept as typed.
    pub fn update_record(&mut self, record: TodoRecord) {
        self.record = record;
    }

    /// Open the inline editor, seeding the buffer with the current content
    pub fn begin_edit(&mut self) {
        if self.is_editing() {
            return;
        }
        debug!(id = %self.record.id, "begin edit");
        self.mode = ItemMode::Editing {
            buffer: self.record.content.clone(),
        };
    }

    /// Replace the edit buffer; ignored while viewing
    pub fn input(&mut self, text: impl Into<String>) {
        if let ItemMode::Editing { buffer } = &mut self.mode {
            *buffer = text.into();
        }
    }

    /// Close the editor, requesting an edit if the buffer holds a change
    ///
    /// The `edit` action fires only when the trimmed buffer is non-empty and
    /// differs from the current content. The editor closes either way.
    ///
    /// # Returns
    /// `true` if `edit` was invoked
    pub fn commit_edit(&mut self, actions: &mut dyn TodoActions) -> bool {
        let ItemMode::Editing { buffer } = std::mem::replace(&mut self.mode, ItemMode::Viewing)
        else {
            return false;
        };

        match normalize_content(&buffer) {
            Ok(content) if content != self.record.content => {
                debug!(id = %self.record.id, "commit edit");
                actions.edit(&self.record.id, content);
                true
            }
            Ok(_) => false,
            Err(e) => {
                debug!(id = %self.record.id, error = %e, "edit discarded");
                false
            }
        }
    }

    /// Close the editor without requesting anything
    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            debug!(id = %self.record.id, "cancel edit");
        }
        self.mode = ItemMode::Viewing;
    }

    /// Edit button: opens the editor, or commits when it is already open
    pub fn press_edit(&mut self, actions: &mut dyn TodoActions) {
        if self.is_editing() {
            self.commit_edit(actions);
        } else {
            self.begin_edit();
        }
    }

    /// Key press inside the inline editor
    pub fn handle_key(&mut self, key: EditKey, actions: &mut dyn TodoActions) {
        match key {
            EditKey::Enter => {
                self.commit_edit(actions);
            }
            EditKey::Escape => self.cancel_edit(),
        }
    }

    /// Focus left the inline editor
    pub fn blur(&mut self, actions: &mut dyn TodoActions) {
        self.commit_edit(actions);
    }

    /// Request a completion flip; the local `completed` flag is left alone
    pub fn toggle(&self, actions: &mut dyn TodoActions) {
        actions.toggle(&self.record.id);
    }

    /// Request removal; the record stays rendered until the caller drops it
    pub fn delete(&self, actions: &mut dyn TodoActions) {
        actions.delete(&self.record.id);
    }

    /// Build the display model
    ///
    /// # Arguments
    /// * `now` - Current time; dates are shown in its time zone
    /// * `soon_window` - Width of the due-soon window
    pub fn view<Tz>(&self, now: &DateTime<Tz>, soon_window: Duration) -> ItemView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let record = &self.record;
        let due = DueStatus::evaluate_with_window(
            record.due_date,
            record.completed,
            now,
            soon_window,
        );
        let tz = now.timezone();

        ItemView {
            id: record.id.clone(),
            content: record.content.clone(),
            editing: self.edit_buffer().map(str::to_string),
            completed: record.completed,
            priority: record.priority,
            priority_style: record.priority.style(),
            category: record.category.clone(),
            tags: record.tags.as_slice().to_vec(),
            due,
            due_label: record
                .due_date
                .map(|d| formatting::format_due_label(d, due.badge(), &tz)),
            created_label: record
                .created_at
                .map(|c| formatting::format_created_at(c, &tz)),
        }
    }
}
