use serde::Serialize;
use std::collections::BTreeMap;

use crate::grading::LetterGrade;
use crate::roster::student::GradedStudent;

/// Class-wide statistics over the weighted averages of a roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassSummary {
    pub count: usize,
    pub mean_average: f64,
    /// Population standard deviation of the averages.
    pub stddev: f64,
    pub highest: f64,
    pub lowest: f64,
    pub distribution: BTreeMap<LetterGrade, usize>,
}

impl ClassSummary {
    /// Returns `None` when there is nothing to summarize.
    pub fn from_graded(graded: &[GradedStudent]) -> Option<Self> {
        if graded.is_empty() {
            return None;
        }

        let count = graded.len();
        let n = count as f64;
        let mean_average = graded.iter().map(|g| g.average).sum::<f64>() / n;
        let variance = graded
            .iter()
            .map(|g| (g.average - mean_average).powi(2))
            .sum::<f64>()
            / n;

        let highest = graded
            .iter()
            .map(|g| g.average)
            .fold(f64::NEG_INFINITY, f64::max);
        let lowest = graded
            .iter()
            .map(|g| g.average)
            .fold(f64::INFINITY, f64::min);

        let mut distribution: BTreeMap<LetterGrade, usize> =
            LetterGrade::ALL.iter().map(|g| (*g, 0)).collect();
        for g in graded {
            *distribution.entry(g.grade).or_default() += 1;
        }

        Some(Self {
            count,
            mean_average,
            stddev: variance.sqrt(),
            highest,
            lowest,
            distribution,
        })
    }

    pub fn count_of(&self, grade: LetterGrade) -> usize {
        self.distribution.get(&grade).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::WeightSet;
    use crate::roster::student::Student;

    fn graded(scores: &[f64]) -> Vec<GradedStudent> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| {
                Student::new("Last", "First", i.to_string(), *s, *s, *s)
                    .graded(&WeightSet::default())
            })
            .collect()
    }

    #[test]
    fn test_empty_is_none() {
        assert!(ClassSummary::from_graded(&[]).is_none());
    }

    #[test]
    fn test_statistics() {
        let summary = ClassSummary::from_graded(&graded(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]))
            .unwrap();

        assert_eq!(summary.count, 8);
        assert_eq!(summary.mean_average, 5.0);
        assert_eq!(summary.stddev, 2.0);
        assert_eq!(summary.highest, 9.0);
        assert_eq!(summary.lowest, 2.0);
        assert_eq!(summary.count_of(LetterGrade::F), 8);
        assert_eq!(summary.count_of(LetterGrade::A), 0);
    }

    #[test]
    fn test_distribution() {
        let summary = ClassSummary::from_graded(&graded(&[95.0, 90.0, 85.0, 72.0, 10.0])).unwrap();

        assert_eq!(summary.count_of(LetterGrade::A), 1);
        assert_eq!(summary.count_of(LetterGrade::B), 2);
        assert_eq!(summary.count_of(LetterGrade::C), 1);
        assert_eq!(summary.count_of(LetterGrade::D), 0);
        assert_eq!(summary.count_of(LetterGrade::F), 1);
        assert_eq!(summary.distribution.len(), 5);
    }
}
