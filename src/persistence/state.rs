use super::store::KeyValueStore;
use crate::domain::{format_day, parse_day, DaySnapshot, Task, TaskList};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Key holding the day record
pub const STATE_KEY: &str = "donein3";

/// Key holding the dark-mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Day record as stored, field names fixed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub tasks: Vec<Task>,
    pub streak: u32,
    pub date: String,
}

/// Reasons a stored day record is unusable
#[derive(Debug, Error)]
pub enum StateError {
    #[error("malformed state record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unrecognised day {0:?}")]
    InvalidDate(String),
    #[error("record holds {0} tasks, at most 3 are allowed")]
    TooManyTasks(usize),
    #[error("task {0} has no text")]
    BlankTask(String),
}

impl From<&DaySnapshot> for PersistedState {
    fn from(snapshot: &DaySnapshot) -> Self {
        Self {
            tasks: snapshot.tasks.iter().cloned().collect(),
            streak: snapshot.streak,
            date: format_day(snapshot.date),
        }
    }
}

impl TryFrom<PersistedState> for DaySnapshot {
    type Error = StateError;

    fn try_from(state: PersistedState) -> Result<Self, Self::Error> {
        let date = parse_day(&state.date).ok_or_else(|| StateError::InvalidDate(state.date.clone()))?;

        if let Some(blank) = state.tasks.iter().find(|t| t.text.trim().is_empty()) {
            return Err(StateError::BlankTask(blank.id.to_string()));
        }

        let count = state.tasks.len();
        let tasks = TaskList::from_tasks(state.tasks).ok_or(StateError::TooManyTasks(count))?;

        Ok(DaySnapshot {
            date,
            tasks,
            streak: state.streak,
        })
    }
}

/// Decode a stored day record
pub fn decode_state(raw: &str) -> Result<DaySnapshot, StateError> {
    let state: PersistedState = serde_json::from_str(raw)?;
    DaySnapshot::try_from(state)
}

/// Encode a day record for storage
pub fn encode_state(snapshot: &DaySnapshot) -> Result<String, StateError> {
    Ok(serde_json::to_string(&PersistedState::from(snapshot))?)
}

/// Load the last day record.
///
/// Anything unreadable is treated as if nothing had been stored.
pub fn load_snapshot(store: &dyn KeyValueStore) -> Option<DaySnapshot> {
    let raw = match store.get(STATE_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            warn!("failed to read stored day, starting fresh: {:#}", e);
            return None;
        }
    };

    match decode_state(&raw) {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            warn!("discarding stored day: {}", e);
            None
        }
    }
}

/// Overwrite the day record
pub fn save_snapshot(store: &mut dyn KeyValueStore, snapshot: &DaySnapshot) -> Result<()> {
    let raw = encode_state(snapshot)?;
    store.set(STATE_KEY, &raw)
}

/// Remove the day record entirely
pub fn clear_snapshot(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(STATE_KEY)
}

/// Load the dark-mode flag, light unless exactly "true" is stored
pub fn load_dark_mode(store: &dyn KeyValueStore) -> bool {
    match store.get(DARK_MODE_KEY) {
        Ok(value) => value.as_deref().map(str::trim) == Some("true"),
        Err(e) => {
            warn!("failed to read theme preference: {:#}", e);
            false
        }
    }
}

pub fn save_dark_mode(store: &mut dyn KeyValueStore, dark: bool) -> Result<()> {
    store.set(DARK_MODE_KEY, if dark { "true" } else { "false" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn october(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn test_decode_browser_record() {
        let raw = r#"{"tasks":[{"id":"1760870000000","text":"Run","done":true},{"id":"1760870000001","text":"Read","done":false}],"streak":5,"date":"Sun Oct 18 2026"}"#;
        let snapshot = decode_state(raw).unwrap();

        assert_eq!(snapshot.date, october(18));
        assert_eq!(snapshot.streak, 5);
        assert_eq!(snapshot.tasks.len(), 2);
        assert_eq!(snapshot.tasks.get(0).unwrap().id.to_string(), "1760870000000");
        assert!(snapshot.tasks.get(0).unwrap().done);
    }

    #[test]
    fn test_encode_field_names() {
        let mut tasks = TaskList::new();
        tasks.push("Write").unwrap();
        let snapshot = DaySnapshot {
            date: october(19),
            tasks,
            streak: 2,
        };

        let value: serde_json::Value = serde_json::from_str(&encode_state(&snapshot).unwrap()).unwrap();
        assert_eq!(value["date"], "Mon Oct 19 2026");
        assert_eq!(value["streak"], 2);
        assert_eq!(value["tasks"][0]["text"], "Write");
        assert_eq!(value["tasks"][0]["done"], false);
        assert!(value["tasks"][0]["id"].is_string());
    }

    #[test]
    fn test_same_day_round_trip() {
        let mut tasks = TaskList::new();
        let id = tasks.push("One").unwrap().id.clone();
        tasks.push("Two").unwrap();
        tasks.toggle(&id);
        let snapshot = DaySnapshot {
            date: october(19),
            tasks,
            streak: 7,
        };

        let decoded = decode_state(&encode_state(&snapshot).unwrap()).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_decode_rejects_malformed() {
        assert!(matches!(decode_state("not json"), Err(StateError::Json(_))));
        assert!(matches!(decode_state(r#"{"tasks":[],"streak":-1,"date":"Mon Oct 19 2026"}"#), Err(StateError::Json(_))));
        assert!(matches!(decode_state(r#"{"tasks":[],"date":"Mon Oct 19 2026"}"#), Err(StateError::Json(_))));
        assert!(matches!(decode_state(r#"{"tasks":[],"streak":1,"date":"someday"}"#), Err(StateError::InvalidDate(_))));
    }

    #[test]
    fn test_decode_rejects_broken_invariants() {
        let four = r#"{"tasks":[
            {"id":"a","text":"a","done":true},{"id":"b","text":"b","done":true},
            {"id":"c","text":"c","done":true},{"id":"d","text":"d","done":true}
        ],"streak":1,"date":"Mon Oct 19 2026"}"#;
        assert!(matches!(decode_state(four), Err(StateError::TooManyTasks(4))));

        let blank = r#"{"tasks":[{"id":"a","text":"  ","done":false}],"streak":1,"date":"Mon Oct 19 2026"}"#;
        assert!(matches!(decode_state(blank), Err(StateError::BlankTask(_))));
    }

    #[test]
    fn test_load_snapshot_treats_garbage_as_absent() {
        let store = MemoryStore::with(&[(STATE_KEY, "{\"tasks\": oops")]);
        assert_eq!(load_snapshot(&store), None);

        let empty = MemoryStore::new();
        assert_eq!(load_snapshot(&empty), None);
    }

    #[test]
    fn test_save_and_clear_snapshot() {
        let mut store = MemoryStore::new();
        let snapshot = DaySnapshot {
            date: october(19),
            tasks: TaskList::new(),
            streak: 3,
        };

        save_snapshot(&mut store, &snapshot).unwrap();
        assert_eq!(load_snapshot(&store), Some(snapshot));

        clear_snapshot(&mut store).unwrap();
        assert_eq!(store.raw(STATE_KEY), None);
    }

    #[test]
    fn test_dark_mode_flag() {
        let mut store = MemoryStore::new();
        assert!(!load_dark_mode(&store));

        save_dark_mode(&mut store, true).unwrap();
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("true"));
        assert!(load_dark_mode(&store));

        save_dark_mode(&mut store, false).unwrap();
        assert_eq!(store.raw(DARK_MODE_KEY).as_deref(), Some("false"));
        assert!(!load_dark_mode(&store));

        let odd = MemoryStore::with(&[(DARK_MODE_KEY, "yes")]);
        assert!(!load_dark_mode(&odd));
    }
}
