//! Edit handler for the todo MCP server

use crate::TodoServerHandler;
use crate::presenter::{EditKey, TodoCommand};
use crate::todo::normalize_content;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Drives the inline editor of one todo: open, type, press Enter.
    /// Unchanged content is reported and nothing is saved.
    pub async fn handle_edit(&self, id: String, content: String) -> McpResult<String> {
        let id = validation::normalize_todo_id(&id);
        if normalize_content(&content).is_err() {
            bail_public!(
                _,
                "Empty content: a todo needs a non-empty description. To remove a todo use delete()."
            );
        }

        let mut data = self.lock_data();
        let Some(mut item) = Self::item_presenter(&data, &id) else {
            drop(data);
            bail_public!(
                _,
                "Todo not found: '{}' does not exist. Use list() to see available todos.",
                id
            );
        };

        let mut commands: Vec<TodoCommand> = Vec::new();
        item.begin_edit();
        item.input(content);
        item.handle_key(EditKey::Enter, &mut commands);

        if commands.is_empty() {
            return Ok(format!("Todo {} unchanged", id));
        }

        for command in commands {
            if let Err(e) = data.execute(command) {
                drop(data);
                bail_public!(_, "Failed to edit todo: {}", e);
            }
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Todo {} updated successfully", id))
    }
}
