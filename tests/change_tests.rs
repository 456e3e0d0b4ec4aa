//! Toggle, edit and delete operation tests
mod common;

use common::{extract_id_from_response, get_test_handler};
use todo_mcp::TodoServerHandler;

async fn add(handler: &TodoServerHandler, content: &str) -> String {
    let response = handler
        .handle_add(content.to_string(), None, None, None, None)
        .await
        .unwrap();
    extract_id_from_response(&response)
}

#[tokio::test]
async fn test_toggle_flips_completed() {
    let (handler, _temp_file) = get_test_handler();
    let id = add(&handler, "Buy milk").await;

    let result = handler.handle_toggle(id.clone()).await.unwrap();
    assert!(result.contains("completed"));
    assert!(handler.records()[0].completed);

    let result = handler.handle_toggle(format!(" {} ", id)).await.unwrap();
    assert!(result.contains("not completed"));
    assert!(!handler.records()[0].completed);
}

#[tokio::test]
async fn test_toggle_nonexistent_todo() {
    let (handler, _temp_file) = get_test_handler();
    assert!(handler.handle_toggle("todo-9".to_string()).await.is_err());
}

#[tokio::test]
async fn test_edit_replaces_content() {
    let (handler, _temp_file) = get_test_handler();
    let id = add(&handler, "Buy milk").await;

    let result = handler
        .handle_edit(id.clone(), "  Buy oat milk ".to_string())
        .await
        .unwrap();
    assert!(result.contains("updated"));
    assert_eq!(handler.records()[0].content, "Buy oat milk");
}

#[tokio::test]
async fn test_edit_unchanged_content() {
    let (handler, _temp_file) = get_test_handler();
    let id = add(&handler, "Buy milk").await;

    let result = handler
        .handle_edit(id, "Buy milk ".to_string())
        .await
        .unwrap();
    assert!(result.contains("unchanged"));
    assert_eq!(handler.records()[0].content, "Buy milk");
}

#[tokio::test]
async fn test_edit_empty_content_rejected() {
    let (handler, _temp_file) = get_test_handler();
    let id = add(&handler, "Buy milk").await;

    assert!(handler.handle_edit(id, "   ".to_string()).await.is_err());
    assert_eq!(handler.records()[0].content, "Buy milk");
}

#[tokio::test]
async fn test_edit_nonexistent_todo() {
    let (handler, _temp_file) = get_test_handler();
    let result = handler
        .handle_edit("todo-9".to_string(), "Anything".to_string())
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_delete_removes_todo() {
    let (handler, _temp_file) = get_test_handler();
    let keep = add(&handler, "Keep me").await;
    let gone = add(&handler, "Remove me").await;

    handler.handle_delete(gone.clone()).await.unwrap();

    let records = handler.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, keep);
    assert!(handler.handle_delete(gone).await.is_err());
}

#[tokio::test]
async fn test_changes_are_persisted() {
    let (handler, temp_file) = get_test_handler();
    let id = add(&handler, "Buy milk").await;
    handler.handle_toggle(id.clone()).await.unwrap();
    handler
        .handle_edit(id.clone(), "Buy oat milk".to_string())
        .await
        .unwrap();

    let reloaded = TodoServerHandler::new(
        temp_file.path().to_str().unwrap(),
        todo_mcp::Config::default(),
    )
    .unwrap();
    let records = reloaded.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].content, "Buy oat milk");
    assert!(records[0].completed);
}
