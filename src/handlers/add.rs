//! Add handler for the todo MCP server

use crate::TodoServerHandler;
use crate::presenter::{AddTodoDialog, TodoCommand};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Fills the add dialog from tool parameters and submits it to the store.
    pub async fn handle_add(
        &self,
        content: String,
        priority: Option<String>,
        category: Option<String>,
        due_date: Option<String>,
        tags: Option<Vec<String>>,
    ) -> McpResult<String> {
        let mut dialog = AddTodoDialog::new(self.config.categories.clone());
        dialog.open();
        dialog.set_content(content);

        if let Some(ref p) = priority {
            dialog.set_priority(validation::parse_priority(p)?);
        }
        if let Some(c) = category.filter(|c| !c.trim().is_empty()) {
            dialog.set_category(c.trim());
        }
        if let Some(ref d) = due_date {
            dialog.set_due_date(Some(validation::parse_due_date(d)?));
        }
        for tag in tags.unwrap_or_default() {
            dialog.set_tag_input(tag);
            dialog.commit_tag();
        }

        let unlisted_category = (!dialog.is_suggested_category()).then(|| {
            format!(
                "Note: category '{}' is not one of the suggested categories ({})",
                dialog.category(),
                dialog.categories().join(", ")
            )
        });

        let mut commands: Vec<TodoCommand> = Vec::new();
        if !dialog.submit(&mut commands) {
            bail_public!(
                _,
                "Empty content: a todo needs a non-empty description. Provide some text in 'content'."
            );
        }

        let mut data = self.lock_data();
        let mut created = Vec::new();
        for command in commands {
            match data.execute(command) {
                Ok(id) => created.push(id),
                Err(e) => {
                    drop(data);
                    bail_public!(_, "Failed to add todo: {}", e);
                }
            }
        }
        drop(data);

        if let Err(e) = self.save_data() {
            bail_public!(_, "Failed to save: {}", e);
        }

        let mut response = format!("Todo created with ID: {}", created.join(", "));
        if let Some(note) = unlisted_category {
            response.push('\n');
            response.push_str(&note);
        }
        Ok(response)
    }
}
