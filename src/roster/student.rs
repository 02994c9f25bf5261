//! Student records and their graded views.

use serde::{Deserialize, Serialize};

use crate::grading::{self, LetterGrade, Scores, WeightSet};

/// A single student record. Immutable once added to a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_number: String,
    pub last_name: String,
    pub first_name: String,
    pub midterm1: f64,
    pub midterm2: f64,
    pub final_exam: f64,
}

impl Student {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        student_number: impl Into<String>,
        midterm1: f64,
        midterm2: f64,
        final_exam: f64,
    ) -> Self {
        Self {
            student_number: student_number.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            midterm1,
            midterm2,
            final_exam,
        }
    }

    pub fn scores(&self) -> Scores {
        Scores::new(self.midterm1, self.midterm2, self.final_exam)
    }

    /// Pairs this record with its average and letter grade under `weights`.
    pub fn graded(&self, weights: &WeightSet) -> GradedStudent {
        let scores = self.scores();
        let average = grading::average(&scores, weights);
        GradedStudent {
            student: self.clone(),
            average,
            grade: LetterGrade::from_average(average),
        }
    }
}

/// A student together with the grade computed from the store's current weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradedStudent {
    pub student: Student,
    pub average: f64,
    pub grade: LetterGrade,
}
