//! Interactive menu session over any line-based reader and writer.
//!
//! The session owns no state of its own; every action is a single call into
//! [`RosterStore`] followed by rendering of the returned value.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::output::{format_student, format_summary};
use crate::parser::{MenuChoice, ParseError, parse_choice, parse_number};
use crate::roster::{Listing, RemoveOutcome, RosterStore, Student};

const MENU: &str = "\nStudent Management System
1. Add Student
2. Print All Students
3. Print Students Sorted
4. Print Specific Student
5. Remove Student
6. Delete All Students
7. Set Weights for Grades
8. Class Summary
0. Exit
";

/// Outcome of reading one prompted field.
enum Input<T> {
    Value(T),
    Invalid,
    Closed,
}

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

/// Unwraps a prompted field, aborting the current action on bad input and
/// ending the session when input is exhausted.
macro_rules! field {
    ($session:expr, $read:expr) => {
        match $read? {
            Input::Value(v) => v,
            Input::Invalid => {
                writeln!($session.output, "Invalid input. Aborting.")?;
                return Ok(Step::Continue);
            }
            Input::Closed => return Ok(Step::Exit),
        }
    };
}

pub struct Session<'a, R, W> {
    store: &'a mut RosterStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(store: &'a mut RosterStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Loops the menu until Exit is chosen or input runs out.
    #[tracing::instrument(skip_all)]
    pub fn run(&mut self) -> Result<()> {
        info!(students = self.store.len(), "Session started");

        loop {
            write!(self.output, "{MENU}")?;
            let line = match self.read_line("Enter your choice: ")? {
                Some(line) => line,
                None => break,
            };

            let choice = match parse_choice(&line) {
                Ok(choice) => choice,
                Err(ParseError::NotANumber(_)) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
                Err(ParseError::UnknownChoice(_)) => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    continue;
                }
            };
            debug!(?choice, "Menu choice");

            if self.dispatch(choice)? == Step::Exit {
                break;
            }
        }

        info!(students = self.store.len(), "Session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Step> {
        match choice {
            MenuChoice::Add => self.add_student(),
            MenuChoice::PrintAll => {
                let listing = self.store.list_all();
                self.print_listing(&listing, "No students to display.")?;
                Ok(Step::Continue)
            }
            MenuChoice::PrintSorted => {
                let listing = self.store.list_sorted();
                self.print_listing(&listing, "No students to sort.")?;
                Ok(Step::Continue)
            }
            MenuChoice::PrintOne => self.print_one(),
            MenuChoice::Remove => self.remove_student(),
            MenuChoice::DeleteAll => {
                self.store.clear();
                writeln!(self.output, "All student data deleted.")?;
                Ok(Step::Continue)
            }
            MenuChoice::SetWeights => self.set_weights(),
            MenuChoice::Summary => {
                match self.store.summary() {
                    Some(summary) => {
                        for line in format_summary(&summary) {
                            writeln!(self.output, "{line}")?;
                        }
                    }
                    None => writeln!(self.output, "No students to summarize.")?,
                }
                Ok(Step::Continue)
            }
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting the program.")?;
                Ok(Step::Exit)
            }
        }
    }

    fn add_student(&mut self) -> Result<Step> {
        let last_name = field!(self, self.read_text("Enter Last Name: "));
        let first_name = field!(self, self.read_text("Enter First Name: "));
        let student_number = field!(self, self.read_text("Enter Student Number: "));
        let midterm1 = field!(self, self.read_number("Enter Midterm #1 Grade: "));
        let midterm2 = field!(self, self.read_number("Enter Midterm #2 Grade: "));
        let final_exam = field!(self, self.read_number("Enter Final Exam Grade: "));

        self.store.add(Student::new(
            last_name,
            first_name,
            student_number,
            midterm1,
            midterm2,
            final_exam,
        ));
        Ok(Step::Continue)
    }

    fn print_one(&mut self) -> Result<Step> {
        let number = field!(self, self.read_text("Enter Student Number: "));
        match self.store.find_by_number(&number) {
            Some(graded) => writeln!(self.output, "{}", format_student(&graded))?,
            None => writeln!(self.output, "Student not found!")?,
        }
        Ok(Step::Continue)
    }

    fn remove_student(&mut self) -> Result<Step> {
        let number = field!(self, self.read_text("Enter Student Number to Remove: "));
        match self.store.remove(&number) {
            RemoveOutcome::Removed { .. } => writeln!(self.output, "Student removed.")?,
            RemoveOutcome::NotFound => writeln!(self.output, "Student not found!")?,
        }
        Ok(Step::Continue)
    }

    fn set_weights(&mut self) -> Result<Step> {
        let midterm1 = field!(self, self.read_number("Enter Midterm #1 Weight: "));
        let midterm2 = field!(self, self.read_number("Enter Midterm #2 Weight: "));
        let final_exam = field!(self, self.read_number("Enter Final Exam Weight: "));

        match self.store.set_weights(midterm1, midterm2, final_exam) {
            Ok(()) => writeln!(self.output, "Weights updated successfully.")?,
            Err(_) => writeln!(self.output, "Error: The weights must add up to 100.")?,
        }
        Ok(Step::Continue)
    }

    fn print_listing(&mut self, listing: &Listing, empty_message: &str) -> Result<()> {
        match listing {
            Listing::Empty => writeln!(self.output, "{empty_message}")?,
            Listing::Students(students) => {
                for graded in students {
                    writeln!(self.output, "{}", format_student(graded))?;
                }
            }
        }
        Ok(())
    }

    fn read_text(&mut self, label: &str) -> Result<Input<String>> {
        Ok(match self.read_line(label)? {
            Some(line) => Input::Value(line),
            None => Input::Closed,
        })
    }

    fn read_number(&mut self, label: &str) -> Result<Input<f64>> {
        Ok(match self.read_line(label)? {
            Some(line) => match parse_number(&line) {
                Ok(n) => Input::Value(n),
                Err(e) => {
                    debug!(error = %e, "Rejected numeric input");
                    Input::Invalid
                }
            },
            None => Input::Closed,
        })
    }

    /// Prompts and reads one trimmed line. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than failing the session.
    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
