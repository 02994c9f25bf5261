//! Weighted course grading.
//!
//! Combines three component scores under a percentage [`WeightSet`] into a
//! numeric average, and maps that average onto a [`LetterGrade`].

pub mod calculator;
pub mod grade;
pub mod types;

pub use calculator::{average, letter_grade};
pub use grade::LetterGrade;
pub use types::{Scores, WEIGHT_SUM_TOLERANCE, WeightError, WeightSet};
