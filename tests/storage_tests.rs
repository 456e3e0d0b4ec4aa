//! Data file loading tests

use std::fs;
use tempfile::NamedTempFile;
use todo_mcp::{Config, Storage, TodoServerHandler};

fn write_data_file(content: &str) -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(temp_file.path(), content).unwrap();
    temp_file
}

fn load_error(content: &str) -> String {
    let temp_file = write_data_file(content);
    let err = Storage::new(temp_file.path()).load().unwrap_err();
    format!("{:#}", err)
}

#[test]
fn test_load_valid_file() {
    let temp_file = write_data_file(
        r#"
format_version = 1
todo_counter = 2

[[todo]]
id = "todo-1"
content = "Buy milk"
priority = "high"
category = "shopping"
tags = ["dairy"]

[[todo]]
id = "todo-2"
content = "Call mom"
completed = true
"#,
    );

    let store = Storage::new(temp_file.path()).load().unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(store.list()[0].content, "Buy milk");
    assert!(store.list()[1].completed);
}

#[test]
fn test_load_rejects_duplicate_ids() {
    let err = load_error(
        r#"
[[todo]]
id = "todo-1"
content = "First"

[[todo]]
id = "todo-1"
content = "Second"
"#,
    );
    assert!(err.contains("duplicate todo id 'todo-1'"), "{}", err);
}

#[test]
fn test_load_rejects_blank_content() {
    let err = load_error(
        r#"
[[todo]]
id = "todo-1"
content = "   "
"#,
    );
    assert!(err.contains("todo 'todo-1' has empty content"), "{}", err);
}

#[test]
fn test_load_rejects_missing_id() {
    let err = load_error(
        r#"
[[todo]]
id = "todo-1"
content = "First"

[[todo]]
content = "No id"
"#,
    );
    assert!(err.contains("todo #2 has no id"), "{}", err);
}

#[test]
fn test_load_rejects_mixed_bad_records() {
    let temp_file = write_data_file(
        r#"
[[todo]]
id = "todo-1"
content = "   "

[[todo]]
id = "todo-1"
content = "Second"

[[todo]]
content = "No id"
"#,
    );
    assert!(Storage::new(temp_file.path()).load().is_err());
}

#[test]
fn test_load_rejects_newer_format_version() {
    let err = load_error(
        r#"
format_version = 2

[[todo]]
id = "todo-1"
content = "From the future"
"#,
    );
    assert!(err.contains("unsupported format_version 2"), "{}", err);
}

#[test]
fn test_handler_refuses_invalid_file() {
    let temp_file = write_data_file(
        r#"
[[todo]]
id = "todo-1"
content = ""
"#,
    );
    let result = TodoServerHandler::new(temp_file.path().to_str().unwrap(), Config::default());
    assert!(result.is_err());
}
