//! Output formatting and export for graded students.
//!
//! Supports single-line text rendering, JSON serialization, and a CSV report.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

use crate::grading::LetterGrade;
use crate::roster::{ClassSummary, GradedStudent};

/// Renders a graded student as one console line, average to 2 decimals.
pub fn format_student(graded: &GradedStudent) -> String {
    let s = &graded.student;
    format!(
        "Name: {} {}, Student Number: {}, Midterm 1: {}, Midterm 2: {}, Final: {}, Average: {:.2}, Grade: {}",
        s.first_name,
        s.last_name,
        s.student_number,
        s.midterm1,
        s.midterm2,
        s.final_exam,
        graded.average,
        graded.grade
    )
}

/// Renders a class summary as console lines.
pub fn format_summary(summary: &ClassSummary) -> Vec<String> {
    let distribution = LetterGrade::ALL
        .iter()
        .map(|g| format!("{}: {}", g, summary.count_of(*g)))
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("Students: {}", summary.count),
        format!(
            "Class Average: {:.2}, Std Dev: {:.2}",
            summary.mean_average, summary.stddev
        ),
        format!(
            "Highest: {:.2}, Lowest: {:.2}",
            summary.highest, summary.lowest
        ),
        format!("Grades: {}", distribution),
    ]
}

/// Serializes any value as pretty-printed JSON.
pub fn to_json(value: &impl Serialize) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One row of the CSV grade report.
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    generated_at: DateTime<Utc>,
    student_number: &'a str,
    last_name: &'a str,
    first_name: &'a str,
    midterm1: f64,
    midterm2: f64,
    final_exam: f64,
    average: f64,
    grade: LetterGrade,
}

/// Writes graded students to a CSV report at `path`, replacing any existing file.
///
/// A header row is always written, even when `students` is empty.
pub fn write_report(path: impl AsRef<Path>, students: &[GradedStudent]) -> Result<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), rows = students.len(), "Writing CSV report");

    let file = File::create(path)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record([
        "generated_at",
        "student_number",
        "last_name",
        "first_name",
        "midterm1",
        "midterm2",
        "final_exam",
        "average",
        "grade",
    ])?;

    let generated_at = Utc::now();
    for graded in students {
        let s = &graded.student;
        writer.serialize(ReportRow {
            generated_at,
            student_number: &s.student_number,
            last_name: &s.last_name,
            first_name: &s.first_name,
            midterm1: s.midterm1,
            midterm2: s.midterm2,
            final_exam: s.final_exam,
            average: graded.average,
            grade: graded.grade,
        })?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = students.len(), "CSV report written");
    Ok(())
}
