//! Common test utilities for integration tests

#![allow(dead_code)]

use tempfile::NamedTempFile;
use todo_mcp::{Config, TodoRecord, TodoServerHandler};

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
    get_test_handler_with_config(Config::default())
}

/// Create a test handler with temporary storage and the given config
pub fn get_test_handler_with_config(config: Config) -> (TodoServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = TodoServerHandler::new(temp_file.path().to_str().unwrap(), config).unwrap();
    (handler, temp_file)
}

/// Extract todo ID from add() response message
/// Response format: "Todo created with ID: <id>", optionally followed by a note line
pub fn extract_id_from_response(response: &str) -> String {
    response
        .lines()
        .next()
        .and_then(|line| line.rsplit("ID: ").next())
        .unwrap_or("")
        .trim()
        .to_string()
}

/// Create a record with minimal fields
pub fn create_test_record(id: &str, content: &str) -> TodoRecord {
    TodoRecord {
        id: id.to_string(),
        content: content.to_string(),
        ..Default::default()
    }
}
