//! In-memory student roster.
//!
//! [`RosterStore`] owns the records and the current [`WeightSet`](crate::grading::WeightSet);
//! every query hands back [`GradedStudent`] values so rendering stays outside the store.

pub mod store;
pub mod student;
pub mod summary;

pub use store::{Listing, RemoveOutcome, RosterStore};
pub use student::{GradedStudent, Student};
pub use summary::ClassSummary;
