//! Presenter and store working together as caller and component
mod common;

use chrono::{Duration, TimeZone, Utc};
use common::create_test_record;
use todo_mcp::presenter::{DialogField, EditKey, TodoCommand};
use todo_mcp::todo::DueBadge;
use todo_mcp::{AddTodoDialog, Priority, TodoListPresenter, TodoStore};

#[test]
fn test_create_edit_toggle_delete_round() {
    let mut store = TodoStore::new();
    let mut list = TodoListPresenter::default();
    let mut dialog = AddTodoDialog::default();

    dialog.open();
    dialog.set_content("Buy milk");
    dialog.set_priority(Priority::Low);
    dialog.set_category("shopping");
    assert!(dialog.handle_enter(DialogField::Content, &mut store));
    list.sync(store.list().to_vec());
    assert_eq!(list.len(), 1);
    let id = list.items()[0].id().to_string();

    let item = list.item_mut(&id).unwrap();
    item.begin_edit();
    item.input("Buy oat milk");
    item.handle_key(EditKey::Enter, &mut store);
    // Content shown is still the old one until the caller re-supplies data
    assert_eq!(list.item(&id).unwrap().record().content, "Buy milk");
    list.sync(store.list().to_vec());
    assert_eq!(list.item(&id).unwrap().record().content, "Buy oat milk");

    list.item(&id).unwrap().toggle(&mut store);
    assert!(!list.item(&id).unwrap().record().completed);
    list.sync(store.list().to_vec());
    assert!(list.item(&id).unwrap().record().completed);

    list.item(&id).unwrap().delete(&mut store);
    assert_eq!(list.len(), 1);
    list.sync(store.list().to_vec());
    assert!(list.is_empty());
}

#[test]
fn test_failed_callbacks_are_not_rolled_back() {
    let mut store = TodoStore::new();
    let mut list = TodoListPresenter::default();
    list.sync(vec![create_test_record("ghost", "Not in store")]);

    list.item("ghost").unwrap().toggle(&mut store);
    list.item("ghost").unwrap().delete(&mut store);

    assert!(store.is_empty());
    assert_eq!(list.len(), 1);
}

#[test]
fn test_recorded_commands_replay_on_store() {
    let mut store = TodoStore::new();
    let mut commands: Vec<TodoCommand> = Vec::new();
    let mut dialog = AddTodoDialog::default();

    dialog.open();
    dialog.set_content("Plant trees");
    for tag in ["eco", "eco", "green"] {
        dialog.set_tag_input(tag);
        dialog.commit_tag();
    }
    dialog.submit(&mut commands);
    assert!(store.is_empty());

    for command in commands {
        command.apply_to(&mut store);
    }
    assert_eq!(store.list()[0].tags.as_slice(), ["eco", "green"]);
}

#[test]
fn test_views_follow_now() {
    let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
    let mut yesterday = create_test_record("a", "Late");
    yesterday.due_date = Some(now - Duration::days(1));
    let mut tomorrow = create_test_record("b", "Soon");
    tomorrow.due_date = Some(now + Duration::days(1));

    let mut list = TodoListPresenter::default();
    list.sync(vec![yesterday, tomorrow]);

    let views = list.views(&now);
    assert!(views[0].due.overdue);
    assert!(!views[0].due.due_soon);
    assert_eq!(views[0].due.badge(), Some(DueBadge::Overdue));
    assert_eq!(views[0].due_label.as_deref(), Some("Overdue: Jun 9, 2025"));

    assert!(views[1].due.due_soon);
    assert!(!views[1].due.overdue);
    assert_eq!(views[1].due_label.as_deref(), Some("Jun 11, 2025"));

    // Same records two days later: both overdue, nothing cached
    let later = now + Duration::days(2);
    let views = list.views(&later);
    assert!(views[0].due.overdue);
    assert!(views[1].due.overdue);
}
