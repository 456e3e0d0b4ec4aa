//! Delete handler for the todo MCP server

use crate::TodoServerHandler;
use crate::presenter::TodoCommand;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Removes one todo permanently.
    pub async fn handle_delete(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_todo_id(&id);
        let mut data = self.lock_data();

        let Some(item) = Self::item_presenter(&data, &id) else {
            drop(data);
            bail_public!(
                _,
                "Todo not found: '{}' does not exist. Use list() to see available todos.",
                id
            );
        };

        let mut commands: Vec<TodoCommand> = Vec::new();
        item.delete(&mut commands);
        for command in commands {
            if let Err(e) = data.execute(command) {
                drop(data);
                bail_public!(_, "Failed to delete todo: {}", e);
            }
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Todo {} deleted", id))
    }
}
