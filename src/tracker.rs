use crate::domain::{reconcile, Celebration, Clock, DaySnapshot, Rollover, TaskId, TaskList};
use crate::persistence::{
    clear_snapshot, load_dark_mode, load_snapshot, save_dark_mode, save_snapshot, KeyValueStore,
};
use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, error, info};

/// Today's three tasks, the streak and the theme, kept in sync with storage
pub struct DayTracker {
    store: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    tasks: TaskList,
    streak: u32,
    dark: bool,
    celebration: Celebration,
    /// Day the in-memory state belongs to
    date: NaiveDate,
}

impl DayTracker {
    /// Load the stored day and reconcile it with today.
    ///
    /// Nothing is written here; call [`DayTracker::persist`] to re-date the
    /// stored record.
    pub fn initialize(store: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        let today = clock.today();
        let start = reconcile(load_snapshot(store.as_ref()), today);
        let dark = load_dark_mode(store.as_ref());

        info!(
            rollover = ?start.rollover,
            streak = start.streak,
            tasks = start.tasks.len(),
            "day loaded"
        );

        Self {
            store,
            clock,
            tasks: start.tasks,
            streak: start.streak,
            dark,
            celebration: Celebration::new(),
            date: today,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebration.is_active(self.clock.now())
    }

    #[cfg(test)]
    pub fn celebration(&self) -> &Celebration {
        &self.celebration
    }

    /// Id of the task in a zero-based slot
    pub fn task_id_at(&self, slot: usize) -> Option<TaskId> {
        self.tasks.get(slot).map(|t| t.id.clone())
    }

    /// Add a task; blank text or a full list is ignored
    pub fn add_task(&mut self, text: &str) -> bool {
        self.roll_over();

        let Some(task) = self.tasks.push(text) else {
            debug!("add ignored: blank text or no free slot");
            return false;
        };
        debug!(id = %task.id, "task added");

        self.autosave();
        true
    }

    /// Flip a task's done flag; unknown ids are ignored
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        self.roll_over();

        let Some(done) = self.tasks.toggle(id) else {
            debug!(%id, "toggle ignored: no such task");
            return false;
        };
        debug!(%id, done, "task toggled");

        if self.tasks.is_complete() && self.celebration.trigger(self.clock.now()) {
            info!(streak = self.streak, "all three done");
        }

        self.autosave();
        true
    }

    /// Clear today's list and drop the stored record if `confirm` agrees.
    ///
    /// The in-memory streak is left alone and goes out with the next write.
    pub fn reset_day<F: FnOnce() -> bool>(&mut self, confirm: F) -> bool {
        if !confirm() {
            debug!("reset declined");
            return false;
        }

        // Yesterday's completion must be credited before the list goes
        self.roll_over();

        self.tasks.clear();
        self.celebration.cancel();
        self.date = self.clock.today();
        if let Err(e) = clear_snapshot(self.store.as_mut()) {
            error!("failed to clear stored day: {:#}", e);
        }
        info!(streak = self.streak, "day reset");
        true
    }

    /// Switch between light and dark, returning the new preference
    pub fn toggle_theme(&mut self) -> bool {
        self.dark = !self.dark;
        if let Err(e) = save_dark_mode(self.store.as_mut(), self.dark) {
            error!("failed to save theme preference: {:#}", e);
        }
        self.dark
    }

    /// Expire a finished celebration, returning true when it just ended
    pub fn tick(&mut self) -> bool {
        self.celebration.tick(self.clock.now())
    }

    /// Check if the calendar day moved past the loaded day
    pub fn has_day_changed(&self) -> bool {
        self.clock.today() != self.date
    }

    /// Carry the in-memory day over to today if midnight has passed.
    ///
    /// Applies the same rules as start-up and writes the result.
    pub fn roll_over(&mut self) -> Option<Rollover> {
        if !self.has_day_changed() {
            return None;
        }
        let today = self.clock.today();

        let snapshot = DaySnapshot {
            date: self.date,
            tasks: std::mem::take(&mut self.tasks),
            streak: self.streak,
        };
        let start = reconcile(Some(snapshot), today);
        self.tasks = start.tasks;
        self.streak = start.streak;
        self.celebration.cancel();

        info!(rollover = ?start.rollover, streak = self.streak, "new day");
        self.autosave();
        Some(start.rollover)
    }

    /// Write the whole record, dated today
    pub fn persist(&mut self) -> Result<()> {
        self.date = self.clock.today();
        let snapshot = DaySnapshot {
            date: self.date,
            tasks: self.tasks.clone(),
            streak: self.streak,
        };
        save_snapshot(self.store.as_mut(), &snapshot)
    }

    fn autosave(&mut self) {
        if let Err(e) = self.persist() {
            error!("failed to save day: {:#}", e);
        }
    }
}
