//! Due-status classification and relative-time rendering.
//!
//! Every presentation surface goes through `StatusClassifier` so the same
//! problem gets the same tier and phrases everywhere.

pub mod classifier;
pub mod due;
pub mod heatmap;
pub mod relative_time;

pub use classifier::{ProblemView, StatusClassifier};
pub use due::{due_problems, is_due};
pub use heatmap::{HeatmapDay, activity_heatmap};
