pub mod interval;
pub mod scheduler;

pub use interval::{DEFAULT_INTERVAL_DAYS, IntervalCurve, IntervalPolicy};
pub use scheduler::Scheduler;
