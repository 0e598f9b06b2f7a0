use crate::domain::{format_day, MAX_TASKS};
use crate::tracker::DayTracker;

/// Plain-text summary of the day for the `status` command
pub fn status_report(tracker: &DayTracker) -> String {
    let tasks = tracker.tasks();
    let mut output = format!(
        "{}  ·  {} day streak  ·  {}/{} done\n",
        format_day(tracker.date()),
        tracker.streak(),
        tasks.done_count(),
        MAX_TASKS
    );

    for slot in 0..MAX_TASKS {
        let line = match tasks.get(slot) {
            Some(task) if task.done => format!("  {}. [x] {}\n", slot + 1, task.text),
            Some(task) => format!("  {}. [ ] {}\n", slot + 1, task.text),
            None => format!("  {}.  -  Task {}\n", slot + 1, slot + 1),
        };
        output.push_str(&line);
    }

    output
}
