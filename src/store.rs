//! In-memory todo store
//!
//! The store owns every record. It assigns ids, stamps creation times and
//! applies the mutations presenters request through [`TodoActions`].

use crate::presenter::{TodoActions, TodoCommand};
use crate::todo::{NewTodo, TodoRecord, ValidationError, normalize_content};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

/// Errors returned by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("todo '{0}' does not exist")]
    NotFound(String),
    #[error("invalid todo: {0}")]
    Invalid(#[from] ValidationError),
    #[error("todo #{0} has no id")]
    MissingId(usize),
    #[error("duplicate todo id '{0}'")]
    DuplicateId(String),
    #[error("todo '{0}' has empty content")]
    EmptyContent(String),
    #[error("unsupported format_version {0}, newest is {max}", max = CURRENT_FORMAT_VERSION)]
    UnsupportedVersion(u32),
}

/// Newest data file format this build reads and writes
pub const CURRENT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoStore {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,

    /// Counter for generating todo ids
    #[serde(skip_serializing_if = "is_zero")]
    pub todo_counter: u32,

    /// Records in insertion order, serialized as `[[todo]]` tables
    #[serde(rename = "todo", skip_serializing_if = "Vec::is_empty")]
    todos: Vec<TodoRecord>,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

impl Default for TodoStore {
    fn default() -> Self {
        Self {
            format_version: CURRENT_FORMAT_VERSION,
            todo_counter: 0,
            todos: Vec::new(),
        }
    }
}

impl TodoStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the record invariants on data that did not come through `create`
    ///
    /// Ids must be non-empty and unique, content must not be blank and the
    /// format version must be one this build understands.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.format_version == 0 || self.format_version > CURRENT_FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(self.format_version));
        }

        let mut seen = HashSet::new();
        for (index, record) in self.todos.iter().enumerate() {
            if record.id.trim().is_empty() {
                return Err(StoreError::MissingId(index + 1));
            }
            if !seen.insert(record.id.as_str()) {
                return Err(StoreError::DuplicateId(record.id.clone()));
            }
            if normalize_content(&record.content).is_err() {
                return Err(StoreError::EmptyContent(record.id.clone()));
            }
        }
        Ok(())
    }

    /// Generate an id not used by any stored record (e.g., "todo-4")
    pub fn generate_id(&mut self) -> String {
        loop {
            self.todo_counter += 1;
            let id = format!("todo-{}", self.todo_counter);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Persist a new todo created now
    pub fn create(&mut self, todo: NewTodo) -> TodoRecord {
        self.create_at(todo, Utc::now())
    }

    /// Persist a new todo with an explicit creation time
    pub fn create_at(&mut self, todo: NewTodo, created_at: DateTime<Utc>) -> TodoRecord {
        let id = self.generate_id();
        let record = TodoRecord::from_new(id, todo, created_at);
        info!(id = %record.id, "todo created");
        self.todos.push(record.clone());
        record
    }

    /// Find a record by id
    pub fn get(&self, id: &str) -> Option<&TodoRecord> {
        self.todos.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut TodoRecord, StoreError> {
        self.todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// All records in insertion order
    pub fn list(&self) -> &[TodoRecord] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Flip the completion flag
    ///
    /// # Returns
    /// The new value of `completed`
    pub fn toggle(&mut self, id: &str) -> Result<bool, StoreError> {
        let record = self.get_mut(id)?;
        record.toggle_completed();
        info!(id, completed = record.completed, "todo toggled");
        Ok(record.completed)
    }

    /// Replace the content of a record
    ///
    /// The content is trimmed and must not be empty.
    pub fn update_content(&mut self, id: &str, content: &str) -> Result<(), StoreError> {
        let content = normalize_content(content)?;
        let record = self.get_mut(id)?;
        record.apply_edit(content);
        info!(id, "todo edited");
        Ok(())
    }

    /// Remove a record and return it
    pub fn delete(&mut self, id: &str) -> Result<TodoRecord, StoreError> {
        let pos = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        info!(id, "todo deleted");
        Ok(self.todos.remove(pos))
    }

    /// Apply a recorded command
    ///
    /// # Returns
    /// The id of the affected record (the new id for an add)
    pub fn execute(&mut self, command: TodoCommand) -> Result<String, StoreError> {
        match command {
            TodoCommand::Add(todo) => Ok(self.create(todo).id),
            TodoCommand::Toggle(id) => self.toggle(&id).map(|_| id),
            TodoCommand::Delete(id) => self.delete(&id).map(|_| id),
            TodoCommand::Edit { id, content } => self.update_content(&id, &content).map(|_| id),
        }
    }
}

/// Fire-and-forget application of presenter requests
///
/// Failures are logged and dropped; nothing is rolled back.
impl TodoActions for TodoStore {
    fn add(&mut self, todo: NewTodo) {
        self.create(todo);
    }

    fn toggle(&mut self, id: &str) {
        if let Err(e) = TodoStore::toggle(self, id) {
            warn!(id, error = %e, "toggle failed");
        }
    }

    fn delete(&mut self, id: &str) {
        if let Err(e) = TodoStore::delete(self, id) {
            warn!(id, error = %e, "delete failed");
        }
    }

    fn edit(&mut self, id: &str, content: &str) {
        if let Err(e) = self.update_content(id, content) {
            warn!(id, error = %e, "edit failed");
        }
    }
}
