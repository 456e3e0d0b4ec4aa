//! List handler for the todo MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::presenter::TodoListPresenter;
use chrono::Local;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Renders every stored todo through the list presenter, then filters.
    pub async fn handle_list(
        &self,
        completed: Option<bool>,
        category: Option<String>,
    ) -> McpResult<String> {
        let records = self.lock_data().list().to_vec();

        let mut presenter = TodoListPresenter::new(self.config.soon_window());
        presenter.sync(records);
        let mut views = presenter.views(&Local::now());

        if let Some(completed_filter) = completed {
            formatting::apply_completed_filter(&mut views, completed_filter);
        }

        if let Some(ref category_filter) = category {
            formatting::apply_category_filter(&mut views, category_filter);
        }

        Ok(formatting::format_views(&views))
    }
}
