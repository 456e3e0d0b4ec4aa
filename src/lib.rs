//! Todo MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a todo
//! list with priorities, categories, due dates and tags.
//!
//! # Architecture
//!
//! The library follows a layered architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Presenter Layer**: `presenter` module - Item editing, list rendering and
//!   the add dialog; turns user intent into [`presenter::TodoActions`] calls
//! - **Domain Layer**: `todo` module - Record shape, validation and due-date state
//! - **Persistence Layer**: `store` and `storage` modules - Record ownership and
//!   TOML file storage
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::{Config, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("todos.toml", Config::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod formatting;
mod handlers;
pub mod presenter;
pub mod storage;
pub mod store;
pub mod todo;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use config::Config;
pub use presenter::{AddTodoDialog, TodoActions, TodoItemPresenter, TodoListPresenter};
pub use storage::Storage;
pub use store::{StoreError, TodoStore};
pub use todo::{NewTodo, Priority, TodoDraft, TodoRecord, ValidationError, validate_and_normalize};

/// MCP Server handler for todo management
///
/// All changes are automatically persisted to a TOML file.
pub struct TodoServerHandler {
    pub(crate) data: Mutex<TodoStore>,
    pub(crate) storage: Storage,
    pub(crate) config: Config,
}

impl TodoServerHandler {
    /// Create a new todo server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the todo data file (TOML format)
    /// * `config` - Presentation settings
    ///
    /// # Returns
    /// Result containing the handler or an error
    pub fn new(storage_path: &str, config: Config) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load()?);
        Ok(Self {
            data,
            storage,
            config,
        })
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Snapshot of all stored records
    pub fn records(&self) -> Vec<TodoRecord> {
        self.lock_data().list().to_vec()
    }

    /// Lock the store, recovering the data if a previous holder panicked
    pub(crate) fn lock_data(&self) -> MutexGuard<'_, TodoStore> {
        self.data.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Save todo data to the storage file
    pub(crate) fn save_data(&self) -> Result<()> {
        let data = self.lock_data();
        self.storage.save(&data)?;
        Ok(())
    }

    /// Presenter for the record with `id`, as currently stored
    pub(crate) fn item_presenter(data: &TodoStore, id: &str) -> Option<TodoItemPresenter> {
        data.get(id).cloned().map(TodoItemPresenter::new)
    }
}

/// Todo list server for capturing and tracking tasks.
///
/// Each todo has a description, a priority (low/medium/high), a category
/// (general, work, personal, shopping, health, learning or any other text),
/// an optional due date and optional tags. Todos are listed with their due
/// state: overdue, due today, or due soon.
///
/// Todo IDs are assigned by the server: todo-1, todo-2, ...
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Add**: Create a todo. Content is required; everything else is optional.
    /// **Tags**: Blank and repeated tags are dropped.
    #[tool]
    async fn add(
        &self,
        /// Content: what needs to be done
        content: String,
        /// Priority: low/medium/high (default: medium)
        priority: Option<String>,
        /// Category: e.g., general, work, personal, shopping, health, learning (default: general)
        category: Option<String>,
        /// Due date: YYYY-MM-DD or RFC 3339 timestamp (optional)
        due_date: Option<String>,
        /// Tags: list of labels (optional)
        tags: Option<Vec<String>>,
    ) -> McpResult<String> {
        self.handle_add(content, priority, category, due_date, tags)
            .await
    }

    /// **List**: Show todos with priority, category, tags and due state.
    /// **Filters**: completed=true/false, category name. No filter = all.
    #[tool]
    async fn list(
        &self,
        /// Completed filter: true for done todos, false for open ones (optional)
        completed: Option<bool>,
        /// Category filter, case-insensitive (optional)
        category: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(completed, category).await
    }

    /// **Toggle**: Mark a todo completed, or reopen a completed one.
    #[tool]
    async fn toggle(
        &self,
        /// Todo ID (e.g., "todo-1")
        id: String,
    ) -> McpResult<String> {
        self.handle_toggle(id).await
    }

    /// **Edit**: Replace the description of a todo. Unchanged text is a no-op.
    #[tool]
    async fn edit(
        &self,
        /// Todo ID (e.g., "todo-1")
        id: String,
        /// New content: must not be empty
        content: String,
    ) -> McpResult<String> {
        self.handle_edit(id, content).await
    }

    /// **Delete**: Permanently remove a todo.
    #[tool]
    async fn delete(
        &self,
        /// Todo ID (e.g., "todo-1")
        id: String,
    ) -> McpResult<String> {
        self.handle_delete(id).await
    }
}
