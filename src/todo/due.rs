use chrono::{DateTime, Duration, TimeZone, Utc};

/// Width of the "due soon" window in days
pub const DEFAULT_DUE_SOON_DAYS: i64 = 3;

/// Highlight shown next to a due date
///
/// At most one badge is shown; see [`DueStatus::badge`] for precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBadge {
    Overdue,
    DueToday,
}

impl DueBadge {
    /// Text placed before the formatted due date
    pub fn prefix(self) -> &'static str {
        match self {
            DueBadge::Overdue => "Overdue: ",
            DueBadge::DueToday => "Due today: ",
        }
    }
}

/// Due-date display flags
///
/// Always derived from `(due_date, completed, now)` at render time and never
/// stored on a record. The three flags are independent and may overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueStatus {
    /// Due date is in the past and the todo is not completed
    pub overdue: bool,
    /// Due date falls on the current calendar day of `now`'s time zone
    pub due_today: bool,
    /// Due date is after `now` but within the due-soon window
    pub due_soon: bool,
}

impl DueStatus {
    /// Evaluate with the default three-day due-soon window
    pub fn evaluate<Tz: TimeZone>(
        due_date: Option<DateTime<Utc>>,
        completed: bool,
        now: &DateTime<Tz>,
    ) -> Self {
        Self::evaluate_with_window(
            due_date,
            completed,
            now,
            Duration::days(DEFAULT_DUE_SOON_DAYS),
        )
    }

    /// Evaluate the display flags
    ///
    /// # Arguments
    /// * `due_date` - Deadline of the todo, if any
    /// * `completed` - Completion flag as last supplied by the store
    /// * `now` - Current time; its time zone decides what "today" is
    /// * `soon_window` - How far ahead a due date counts as "soon"
    pub fn evaluate_with_window<Tz: TimeZone>(
        due_date: Option<DateTime<Utc>>,
        completed: bool,
        now: &DateTime<Tz>,
        soon_window: Duration,
    ) -> Self {
        let Some(due) = due_date else {
            return Self::default();
        };
        let now_utc = now.with_timezone(&Utc);
        let local_due = due.with_timezone(&now.timezone());

        Self {
            overdue: due < now_utc && !completed,
            due_today: local_due.date_naive() == now.date_naive(),
            due_soon: due > now_utc && due < now_utc + soon_window,
        }
    }

    /// Badge to display: overdue wins over due today; due-soon is separate
    pub fn badge(&self) -> Option<DueBadge> {
        if self.overdue {
            Some(DueBadge::Overdue)
        } else if self.due_today {
            Some(DueBadge::DueToday)
        } else {
            None
        }
    }
}
