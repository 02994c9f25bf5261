//! Score and weight types used by the grade calculator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum distance from 100 tolerated when validating a weight sum.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// The three component scores of a student.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub midterm1: f64,
    pub midterm2: f64,
    pub final_exam: f64,
}

impl Scores {
    pub fn new(midterm1: f64, midterm2: f64, final_exam: f64) -> Self {
        Self {
            midterm1,
            midterm2,
            final_exam,
        }
    }
}

/// Percentage weights applied to each component score.
///
/// Always sums to 100: the only constructor is [`WeightSet::new`], which
/// validates the triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightSet {
    midterm1: f64,
    midterm2: f64,
    final_exam: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum WeightError {
    #[error("weights must sum to 100 (got {sum})")]
    BadSum { sum: f64 },
}

impl WeightSet {
    pub fn new(midterm1: f64, midterm2: f64, final_exam: f64) -> Result<Self, WeightError> {
        let sum = midterm1 + midterm2 + final_exam;
        // NaN sums fall through to the error
        if (sum - 100.0).abs() <= WEIGHT_SUM_TOLERANCE {
            Ok(Self {
                midterm1,
                midterm2,
                final_exam,
            })
        } else {
            Err(WeightError::BadSum { sum })
        }
    }

    pub fn midterm1(&self) -> f64 {
        self.midterm1
    }

    pub fn midterm2(&self) -> f64 {
        self.midterm2
    }

    pub fn final_exam(&self) -> f64 {
        self.final_exam
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            midterm1: 25.0,
            midterm2: 25.0,
            final_exam: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = WeightSet::default();
        assert_eq!(w.midterm1(), 25.0);
        assert_eq!(w.midterm2(), 25.0);
        assert_eq!(w.final_exam(), 50.0);
    }

    #[test]
    fn test_accepts_exact_hundred() {
        let w = WeightSet::new(30.0, 30.0, 40.0).unwrap();
        assert_eq!(w.final_exam(), 40.0);
        assert!(WeightSet::new(0.0, 0.0, 100.0).is_ok());
    }

    #[test]
    fn test_accepts_sum_within_tolerance() {
        assert!(WeightSet::new(33.3, 33.3, 33.4).is_ok());
        assert!(WeightSet::new(10.1, 20.2, 69.7).is_ok());
    }

    #[test]
    fn test_rejects_bad_sum() {
        assert_eq!(
            WeightSet::new(30.0, 30.0, 30.0),
            Err(WeightError::BadSum { sum: 90.0 })
        );
        assert!(WeightSet::new(50.0, 50.0, 0.1).is_err());
        assert!(WeightSet::new(f64::NAN, 50.0, 50.0).is_err());
    }

    #[test]
    fn test_tolerance_edge() {
        assert!(WeightSet::new(50.0, 50.0, 1e-7).is_ok());
        assert!(WeightSet::new(50.0, 50.0, 1e-5).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = WeightSet::new(1.0, 1.0, 1.0).unwrap_err();
        assert!(err.to_string().starts_with("weights must sum to 100"));
    }
}
