pub mod celebration;
pub mod clock;
pub mod enums;
pub mod rollover;
pub mod task;

pub use celebration::Celebration;
pub use clock::{Clock, SystemClock};
pub use enums::{Theme, UiMode};
pub use rollover::{format_day, parse_day, reconcile, DaySnapshot, Rollover};
pub use task::{Task, TaskId, TaskList, MAX_TASKS};
