pub mod calendar;
pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;
pub mod scheduling;
pub mod status;

pub use calendar::Calendar;
pub use config::Config;
pub use error::{Result, RevisionError};
pub use models::{Difficulty, NewProblem, Problem, ReviewStatus, RevisionEvent, Severity};
pub use scheduling::{IntervalCurve, IntervalPolicy, Scheduler};
pub use status::StatusClassifier;
