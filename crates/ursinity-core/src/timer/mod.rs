mod clock;
mod engine;
mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{DurationTimer, TimerSnapshot, TimerState};
pub use stopwatch::Stopwatch;
