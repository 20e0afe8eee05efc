pub mod driver;
pub mod timer;

pub use driver::{AnimationDriver, AnimationRun, AnimationSettings, PlaybackState};
pub use timer::{FrameTimer, IntervalTimer, IntervalTimers, ManualTimer, ManualTimers, TimerSource};
