use crate::domain::{Rollover, Theme, UiMode, MAX_TASKS};
use crate::tracker::DayTracker;

/// Main application state
pub struct AppState {
    pub tracker: DayTracker,
    pub ui_mode: UiMode,
    pub input: String,
    pub selected_index: usize,
    /// Increments every tick, drives the confetti
    pub animation_frame: u32,
    /// One-line notice shown above the keybindings
    pub status: Option<String>,
}

impl AppState {
    pub fn new(tracker: DayTracker) -> Self {
        Self {
            tracker,
            ui_mode: UiMode::Normal,
            input: String::new(),
            selected_index: 0,
            animation_frame: 0,
            status: None,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_dark(self.tracker.is_dark())
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tracker.tasks().len() {
            self.selected_index += 1;
        }
    }

    /// Toggle the task in a zero-based slot; empty slots do nothing
    pub fn toggle_slot(&mut self, slot: usize) {
        if let Some(id) = self.tracker.task_id_at(slot) {
            self.tracker.toggle_task(&id);
            self.selected_index = slot;
        }
    }

    pub fn toggle_selected(&mut self) {
        self.toggle_slot(self.selected_index);
    }

    pub fn start_add_task(&mut self) {
        if self.tracker.tasks().is_full() {
            self.status = Some(format!("All {} slots are taken", MAX_TASKS));
            return;
        }
        self.ui_mode = UiMode::AddingTask;
        self.status = None;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the input line; blank input keeps the prompt open
    pub fn submit_input(&mut self) {
        if self.tracker.add_task(&self.input) {
            self.input.clear();
            self.selected_index = self.tracker.tasks().len() - 1;
            self.ui_mode = UiMode::Normal;
        } else if self.tracker.tasks().is_full() {
            self.cancel_input();
        }
    }

    pub fn cancel_input(&mut self) {
        self.input.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Ask before clearing the day
    pub fn request_reset(&mut self) {
        self.ui_mode = UiMode::ConfirmReset;
    }

    pub fn answer_reset(&mut self, confirmed: bool) {
        if self.tracker.reset_day(|| confirmed) {
            self.selected_index = 0;
            self.status = Some("Fresh start".to_string());
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn toggle_theme(&mut self) {
        self.tracker.toggle_theme();
    }

    /// Advance timers and pick up a new day
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.tracker.tick();

        if let Some(rollover) = self.tracker.roll_over() {
            self.selected_index = 0;
            self.input.clear();
            self.ui_mode = UiMode::Normal;
            self.status = Some(rollover_message(rollover, self.tracker.streak()));
        }
    }
}

/// Notice shown when a new day begins while the app is open
pub fn rollover_message(rollover: Rollover, streak: u32) -> String {
    match rollover {
        Rollover::SameDay => "Welcome back".to_string(),
        Rollover::StreakExtended => format!("New day! Streak is now {}", streak),
        Rollover::StreakKept => format!("New day. Streak holds at {}", streak),
        Rollover::Fresh => "New day. Time for a fresh streak".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::ManualClock;
    use crate::persistence::MemoryStore;
    use chrono::NaiveDate;

    fn create_test_app() -> (AppState, ManualClock) {
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
        let tracker = DayTracker::initialize(Box::new(MemoryStore::new()), Box::new(clock.clone()));
        let mut app = AppState::new(tracker);
        for text in ["Task 1", "Task 2"] {
            app.start_add_task();
            for c in text.chars() {
                app.input_add_char(c);
            }
            app.submit_input();
        }
        (app, clock)
    }

    #[test]
    fn test_app_state_new() {
        let (app, _) = create_test_app();
        assert_eq!(app.tracker.tasks().len(), 2);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.selected_index, 1);
        assert!(app.input.is_empty());
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn test_move_selection() {
        let (mut app, _) = create_test_app();

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        // Can't go below 0
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        app.move_selection_down();
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_toggle_selected() {
        let (mut app, _) = create_test_app();
        app.toggle_selected();
        assert!(app.tracker.tasks().get(1).unwrap().done);
    }

    #[test]
    fn test_toggle_empty_slot() {
        let (mut app, _) = create_test_app();
        app.toggle_slot(2);
        assert_eq!(app.tracker.tasks().done_count(), 0);
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_blank_input_keeps_prompt_open() {
        let (mut app, _) = create_test_app();
        app.start_add_task();
        app.input_add_char(' ');
        app.submit_input();

        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert_eq!(app.tracker.tasks().len(), 2);

        app.cancel_input();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_backspace() {
        let (mut app, _) = create_test_app();
        app.start_add_task();
        app.input_add_char('a');
        app.input_add_char('b');
        app.input_backspace();
        assert_eq!(app.input, "a");
    }

    #[test]
    fn test_add_refused_when_full() {
        let (mut app, _) = create_test_app();
        app.start_add_task();
        app.input_add_char('c');
        app.submit_input();
        assert_eq!(app.tracker.tasks().len(), 3);

        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_reset_flow() {
        let (mut app, _) = create_test_app();

        app.request_reset();
        assert_eq!(app.ui_mode, UiMode::ConfirmReset);
        app.answer_reset(false);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.tracker.tasks().len(), 2);

        app.request_reset();
        app.answer_reset(true);
        assert!(app.tracker.tasks().is_empty());
        assert_eq!(app.selected_index, 0);
    }

    #[test]
    fn test_toggle_theme() {
        let (mut app, _) = create_test_app();
        app.toggle_theme();
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_tick_picks_up_new_day() {
        let (mut app, clock) = create_test_app();
        app.toggle_slot(0);
        app.toggle_slot(1);

        app.tick();
        assert_eq!(app.animation_frame, 1);
        assert!(app.status.is_none());

        clock.next_day();
        app.tick();
        assert!(app.tracker.tasks().is_empty());
        assert_eq!(app.tracker.streak(), 1);
        assert_eq!(app.status.as_deref(), Some("New day! Streak is now 1"));
    }
}
