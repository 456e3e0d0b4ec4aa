//! Formatting helpers for todo output
//!
//! This module renders item views as text for the MCP tools and applies the
//! list filters.

use crate::presenter::ItemView;
use crate::todo::DueBadge;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Format a due date in the given time zone (e.g., "Jun 9, 2025")
pub fn format_due_date<Tz>(due: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    due.with_timezone(tz).format("%b %-d, %Y").to_string()
}

/// Format a due date with its badge prefix (e.g., "Overdue: Jun 9, 2025")
pub fn format_due_label<Tz>(due: DateTime<Utc>, badge: Option<DueBadge>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let prefix = badge.map(DueBadge::prefix).unwrap_or("");
    format!("{}{}", prefix, format_due_date(due, tz))
}

/// Format a creation timestamp (e.g., "Created Jun 1, 2025 at 9:30 AM")
pub fn format_created_at<Tz>(created: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    created
        .with_timezone(tz)
        .format("Created %b %-d, %Y at %-I:%M %p")
        .to_string()
}

/// Keep only views with the given completion flag
pub fn apply_completed_filter(views: &mut Vec<ItemView>, completed: bool) {
    views.retain(|view| view.completed == completed);
}

/// Keep only views in the given category (case-insensitive)
pub fn apply_category_filter(views: &mut Vec<ItemView>, category: &str) {
    let category_lower = category.to_lowercase();
    views.retain(|view| view.category.to_lowercase() == category_lower);
}

/// Format item views into a display string
///
/// # Arguments
/// * `views` - Views in the order the store supplied them
///
/// # Returns
/// One block per todo: checkbox, priority badge, category, content, then
/// tags, due date and creation date when present
pub fn format_views(views: &[ItemView]) -> String {
    if views.is_empty() {
        return "No todos found".to_string();
    }

    let mut result = format!("Found {} todo(s):\n\n", views.len());
    for view in views {
        let checkbox = if view.completed { "[x]" } else { "[ ]" };
        result.push_str(&format!(
            "- {} [{}] {} ({}, {})\n",
            checkbox, view.id, view.content, view.priority_style.label, view.category
        ));

        if !view.tags.is_empty() {
            result.push_str(&format!("  Tags: {}\n", view.tags.join(", ")));
        }
        if let Some(ref label) = view.due_label {
            result.push_str(&format!("  Due: {}", label));
            if view.due.due_soon {
                result.push_str(" (due soon)");
            }
            result.push('\n');
        }
        if let Some(ref created) = view.created_label {
            result.push_str(&format!("  {}\n", created));
        }
    }

    result
}
