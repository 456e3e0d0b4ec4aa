//! Validation helper functions for the todo MCP server
//!
//! This module turns raw tool parameters (priority, due date, tag lists,
//! ids) into typed values, reporting bad input as invalid-params errors.

use crate::todo::Priority;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a priority parameter
///
/// # Arguments
/// * `priority_str` - Priority string to parse (low, medium, high)
///
/// # Returns
/// Result containing parsed Priority or error
pub fn parse_priority(priority_str: &str) -> McpResult<Priority> {
    priority_str.trim().to_lowercase().parse::<Priority>().map_err(invalid_params)
}

/// Parse a due date in the given time zone
///
/// Accepts a calendar date (`YYYY-MM-DD`, taken as midnight in `tz`) or a
/// full RFC 3339 timestamp.
pub fn parse_due_date_in<Tz: TimeZone>(date_str: &str, tz: &Tz) -> Result<DateTime<Utc>, String> {
    let date_str = date_str.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(instant.with_timezone(&Utc));
    }

    let invalid = || {
        format!(
            "Invalid due date '{}'. Use YYYY-MM-DD (e.g., '2025-03-15') or an RFC 3339 timestamp",
            date_str
        )
    };
    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| invalid())?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .map(|d| d.with_timezone(&Utc))
        .ok_or_else(invalid)
}

/// Parse and validate a due date parameter in the local time zone
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD or RFC 3339 format
///
/// # Returns
/// Result containing the due instant or error
pub fn parse_due_date(date_str: &str) -> McpResult<DateTime<Utc>> {
    parse_due_date_in(date_str, &Local).map_err(invalid_params)
}

/// Normalize todo ID by trimming surrounding whitespace
///
/// # Examples
/// ```
/// # use todo_mcp::validation::normalize_todo_id;
/// assert_eq!(normalize_todo_id(" todo-1 "), "todo-1");
/// ```
pub fn normalize_todo_id(todo_id: &str) -> String {
    todo_id.trim().to_string()
}
