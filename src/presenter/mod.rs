//! Todo editor/presenter
//!
//! Presenters render records supplied by a caller and translate user intent
//! into [`TodoActions`] calls. They never mutate a record themselves; the
//! owning store applies the change and re-supplies the updated records.
//!
//! - `item`: Per-record view/edit state machine
//! - `list`: Ordered collection of item presenters kept in sync with the store
//! - `dialog`: The "add todo" creation flow

mod dialog;
mod item;
mod list;

pub use dialog::{AddTodoDialog, DialogField};
pub use item::{EditKey, ItemView, TodoItemPresenter};
pub use list::TodoListPresenter;

use crate::todo::NewTodo;

/// Mutation requests sent from presenters to the owning store
///
/// Calls are fire-and-forget: presenters do not wait for a result, retry, or
/// roll back. Handling failures is up to the implementor.
pub trait TodoActions {
    /// Persist a new todo; the implementor assigns the id
    fn add(&mut self, todo: NewTodo);
    /// Flip `completed` for the given id
    fn toggle(&mut self, id: &str);
    /// Remove the given id from the collection
    fn delete(&mut self, id: &str);
    /// Replace the content; `content` is already trimmed and non-empty
    fn edit(&mut self, id: &str, content: &str);
}

/// A recorded [`TodoActions`] call
#[derive(Debug, Clone, PartialEq)]
pub enum TodoCommand {
    Add(NewTodo),
    Toggle(String),
    Delete(String),
    Edit { id: String, content: String },
}

/// Records every call in order, for deferred application or inspection
impl TodoActions for Vec<TodoCommand> {
    fn add(&mut self, todo: NewTodo) {
        self.push(TodoCommand::Add(todo));
    }

    fn toggle(&mut self, id: &str) {
        self.push(TodoCommand::Toggle(id.to_string()));
    }

    fn delete(&mut self, id: &str) {
        self.push(TodoCommand::Delete(id.to_string()));
    }

    fn edit(&mut self, id: &str, content: &str) {
        self.push(TodoCommand::Edit {
            id: id.to_string(),
            content: content.to_string(),
        });
    }
}

impl TodoCommand {
    /// Replay this command against another implementor
    pub fn apply_to(self, actions: &mut dyn TodoActions) {
        match self {
            TodoCommand::Add(todo) => actions.add(todo),
            TodoCommand::Toggle(id) => actions.toggle(&id),
            TodoCommand::Delete(id) => actions.delete(&id),
            TodoCommand::Edit { id, content } => actions.edit(&id, &content),
        }
    }
}
