use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter classification of a weighted course average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// All grades, best first.
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
        LetterGrade::F,
    ];

    /// Converts a weighted average (0–100 scale) into a letter grade.
    ///
    /// | Range          | Grade |
    /// |----------------|-------|
    /// | > 90           | A     |
    /// | >= 80          | B     |
    /// | >= 70          | C     |
    /// | >= 60          | D     |
    /// | < 60 (or NaN)  | F     |
    ///
    /// The A band is strict: an average of exactly 90 is a B.
    pub fn from_average(avg: f64) -> Self {
        match avg {
            a if a > 90.0 => LetterGrade::A,
            a if a >= 80.0 => LetterGrade::B,
            a if a >= 70.0 => LetterGrade::C,
            a if a >= 60.0 => LetterGrade::D,
            _ => LetterGrade::F,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            LetterGrade::A => 'A',
            LetterGrade::B => 'B',
            LetterGrade::C => 'C',
            LetterGrade::D => 'D',
            LetterGrade::F => 'F',
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(LetterGrade::from_average(100.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(90.01), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(90.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(80.0), LetterGrade::B);
        assert_eq!(LetterGrade::from_average(79.99), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(70.0), LetterGrade::C);
        assert_eq!(LetterGrade::from_average(69.99), LetterGrade::D);
        assert_eq!(LetterGrade::from_average(60.0), LetterGrade::D);
        assert_eq!(LetterGrade::from_average(59.99), LetterGrade::F);
        assert_eq!(LetterGrade::from_average(0.0), LetterGrade::F);
    }

    #[test]
    fn test_out_of_range_and_nan() {
        assert_eq!(LetterGrade::from_average(150.0), LetterGrade::A);
        assert_eq!(LetterGrade::from_average(-5.0), LetterGrade::F);
        assert_eq!(LetterGrade::from_average(f64::NAN), LetterGrade::F);
    }

    #[test]
    fn test_display() {
        assert_eq!(LetterGrade::B.to_string(), "B");
        assert_eq!(LetterGrade::F.as_char(), 'F');
    }
}
