use super::item::{ItemView, TodoItemPresenter};
use crate::todo::{DEFAULT_DUE_SOON_DAYS, TodoRecord};
use chrono::{DateTime, Duration, TimeZone};
use std::fmt::Display;
use tracing::debug;

/// Presenters for an ordered collection of records
///
/// The caller owns ordering: [`TodoListPresenter::sync`] renders records
/// exactly in the order given, duplicates included.
#[derive(Debug, Clone)]
pub struct TodoListPresenter {
    items: Vec<TodoItemPresenter>,
    soon_window: Duration,
}

impl Default for TodoListPresenter {
    fn default() -> Self {
        Self::new(Duration::days(DEFAULT_DUE_SOON_DAYS))
    }
}

impl TodoListPresenter {
    pub fn new(soon_window: Duration) -> Self {
        Self {
            items: Vec::new(),
            soon_window,
        }
    }

    /// Replace the rendered collection with records re-supplied by the caller
    ///
    /// Items whose id is still present keep their transient edit state.
    /// Items whose id is gone are dropped; that is the only way an item
    /// leaves the view.
    pub fn sync(&mut self, records: impl IntoIterator<Item = TodoRecord>) {
        let mut previous = std::mem::take(&mut self.items);

        for record in records {
            let item = match previous.iter().position(|p| p.id() == record.id) {
                Some(pos) => {
                    let mut item = previous.remove(pos);
                    item.update_record(record);
                    item
                }
                None => TodoItemPresenter::new(record),
            };
            self.items.push(item);
        }

        for gone in &previous {
            debug!(id = %gone.id(), "item removed from view");
        }
    }

    pub fn items(&self) -> &[TodoItemPresenter] {
        &self.items
    }

    /// First item rendered for `id`
    pub fn item(&self, id: &str) -> Option<&TodoItemPresenter> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// First item rendered for `id`, for driving edits
    pub fn item_mut(&mut self, id: &str) -> Option<&mut TodoItemPresenter> {
        self.items.iter_mut().find(|i| i.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Display models for every item, recomputed from `now`
    pub fn views<Tz>(&self, now: &DateTime<Tz>) -> Vec<ItemView>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        self.items
            .iter()
            .map(|item| item.view(now, self.soon_window))
            .collect()
    }
}
