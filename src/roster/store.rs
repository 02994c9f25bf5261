use tracing::{debug, info, warn};

use crate::grading::{WeightError, WeightSet};
use crate::roster::student::{GradedStudent, Student};
use crate::roster::summary::ClassSummary;

/// Result of a list operation.
///
/// An empty roster is reported as [`Listing::Empty`] so callers can render a
/// distinct message instead of printing nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Empty,
    Students(Vec<GradedStudent>),
}

impl Listing {
    fn from_graded(graded: Vec<GradedStudent>) -> Self {
        if graded.is_empty() {
            Listing::Empty
        } else {
            Listing::Students(graded)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// The graded records, or an empty slice for [`Listing::Empty`].
    pub fn students(&self) -> &[GradedStudent] {
        match self {
            Listing::Empty => &[],
            Listing::Students(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { count: usize },
    NotFound,
}

/// Owns the ordered roster and the weights used to grade it.
#[derive(Debug, Default)]
pub struct RosterStore {
    students: Vec<Student>,
    weights: WeightSet,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: WeightSet) -> Self {
        Self {
            students: Vec::new(),
            weights,
        }
    }

    pub fn weights(&self) -> WeightSet {
        self.weights
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Appends a record. Duplicate student numbers and out-of-range scores
    /// are accepted as-is.
    pub fn add(&mut self, student: Student) {
        debug!(
            student_number = %student.student_number,
            last_name = %student.last_name,
            "Adding student"
        );
        self.students.push(student);
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> Listing {
        Listing::from_graded(self.graded(self.students.iter()))
    }

    /// All records ordered by last name, then first name.
    ///
    /// Works on a copy; insertion order of the roster is left untouched.
    pub fn list_sorted(&self) -> Listing {
        let mut sorted: Vec<&Student> = self.students.iter().collect();
        sorted.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        Listing::from_graded(self.graded(sorted.into_iter()))
    }

    /// First record whose student number matches.
    pub fn find_by_number(&self, number: &str) -> Option<GradedStudent> {
        self.students
            .iter()
            .find(|s| s.student_number == number)
            .map(|s| s.graded(&self.weights))
    }

    /// Removes every record whose student number matches.
    pub fn remove(&mut self, number: &str) -> RemoveOutcome {
        let before = self.students.len();
        self.students.retain(|s| s.student_number != number);
        let count = before - self.students.len();

        if count == 0 {
            debug!(student_number = number, "No student to remove");
            RemoveOutcome::NotFound
        } else {
            info!(student_number = number, count, "Removed students");
            RemoveOutcome::Removed { count }
        }
    }

    /// Drops every record. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.students.len();
        self.students.clear();
        info!(count, "Cleared roster");
        count
    }

    /// Replaces all three weights, or leaves the current ones untouched when
    /// the triple does not sum to 100.
    pub fn set_weights(
        &mut self,
        midterm1: f64,
        midterm2: f64,
        final_exam: f64,
    ) -> Result<(), WeightError> {
        match WeightSet::new(midterm1, midterm2, final_exam) {
            Ok(weights) => {
                self.weights = weights;
                info!(midterm1, midterm2, final_exam, "Weights updated");
                Ok(())
            }
            Err(e) => {
                warn!(midterm1, midterm2, final_exam, error = %e, "Rejected weights");
                Err(e)
            }
        }
    }

    pub fn summary(&self) -> Option<ClassSummary> {
        ClassSummary::from_graded(&self.graded(self.students.iter()))
    }

    fn graded<'a>(&self, students: impl Iterator<Item = &'a Student>) -> Vec<GradedStudent> {
        students.map(|s| s.graded(&self.weights)).collect()
    }
}
