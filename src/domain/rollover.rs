use super::task::TaskList;
use chrono::{Duration, NaiveDate};

/// Format of the stored day string, e.g. "Mon Oct 19 2026"
pub const DAY_FORMAT: &str = "%a %b %d %Y";

/// Render a date as a stored day key
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Parse a stored day key back into a date
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DAY_FORMAT).ok()
}

/// State of one day as it was last recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    pub tasks: TaskList,
    pub streak: u32,
}

/// How a recorded day carried over into today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rollover {
    /// Recorded today, restored as-is
    SameDay,
    /// Yesterday's list was completed, streak grew by one
    StreakExtended,
    /// Yesterday's list was not completed, streak carried unchanged
    StreakKept,
    /// Nothing recorded, or the gap is two days or more
    Fresh,
}

/// Today's starting state after reconciling the last snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayStart {
    pub tasks: TaskList,
    pub streak: u32,
    pub rollover: Rollover,
}

/// Decide what survives from the last recorded day.
///
/// An empty list from yesterday never counts as completed.
pub fn reconcile(snapshot: Option<DaySnapshot>, today: NaiveDate) -> DayStart {
    let Some(snapshot) = snapshot else {
        return DayStart {
            tasks: TaskList::new(),
            streak: 0,
            rollover: Rollover::Fresh,
        };
    };

    if snapshot.date == today {
        return DayStart {
            tasks: snapshot.tasks,
            streak: snapshot.streak,
            rollover: Rollover::SameDay,
        };
    }

    if snapshot.date == today - Duration::days(1) {
        let (streak, rollover) = if snapshot.tasks.all_done() {
            (snapshot.streak.saturating_add(1), Rollover::StreakExtended)
        } else {
            (snapshot.streak, Rollover::StreakKept)
        };
        return DayStart {
            tasks: TaskList::new(),
            streak,
            rollover,
        };
    }

    DayStart {
        tasks: TaskList::new(),
        streak: 0,
        rollover: Rollover::Fresh,
    }
}
