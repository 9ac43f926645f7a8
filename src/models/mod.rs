pub mod difficulty;
pub mod problem;
pub mod problem_record;
pub mod review_status;
pub mod revision_event;

pub use difficulty::Difficulty;
pub use problem::{NewProblem, Problem};
pub use problem_record::ProblemRecord;
pub use review_status::{ReviewStatus, Severity};
pub use revision_event::{RevisionEvent, RevisionUpdate};
