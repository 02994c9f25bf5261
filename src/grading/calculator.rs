use crate::grading::grade::LetterGrade;
use crate::grading::types::{Scores, WeightSet};

/// Weighted average of the three component scores.
///
/// Weights are percentages, so the weighted sum is divided by 100 to land
/// back on the score scale. No rounding is applied.
pub fn average(scores: &Scores, weights: &WeightSet) -> f64 {
    (scores.midterm1 * weights.midterm1()
        + scores.midterm2 * weights.midterm2()
        + scores.final_exam * weights.final_exam())
        / 100.0
}

/// Letter grade of the weighted average. See [`LetterGrade::from_average`].
pub fn letter_grade(scores: &Scores, weights: &WeightSet) -> LetterGrade {
    LetterGrade::from_average(average(scores, weights))
}
