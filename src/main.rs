//! CLI entry point for the student roster manager.
//!
//! Runs the interactive menu by default, or grades a single set of scores
//! with the `grade` subcommand.

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use student_roster::{
    console::Session,
    grading::{LetterGrade, Scores, WeightSet, average},
    output::{to_json, write_report},
    parser::parse_number,
    roster::RosterStore,
};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_roster")]
#[command(about = "Manage student records and compute weighted course grades", long_about = None)]
struct Cli {
    #[command(flatten)]
    weights: WeightArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Initial grading weights, in percent. Must sum to 100.
#[derive(Args)]
struct WeightArgs {
    /// Weight of midterm #1
    #[arg(long, global = true, default_value_t = 25.0)]
    m1_weight: f64,

    /// Weight of midterm #2
    #[arg(long, global = true, default_value_t = 25.0)]
    m2_weight: f64,

    /// Weight of the final exam
    #[arg(long, global = true, default_value_t = 50.0)]
    final_weight: f64,
}

impl WeightArgs {
    fn to_weight_set(&self) -> Result<WeightSet> {
        WeightSet::new(self.m1_weight, self.m2_weight, self.final_weight)
            .map_err(|e| anyhow!("invalid initial weights: {e}"))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive student management menu (default)
    Menu {
        /// Write a CSV grade report of the sorted roster when the session ends
        #[arg(short, long, value_name = "PATH")]
        report: Option<PathBuf>,
    },
    /// Compute the average and letter grade for one set of scores
    Grade {
        /// Midterm #1 score
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        midterm1: f64,

        /// Midterm #2 score
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        midterm2: f64,

        /// Final exam score
        #[arg(allow_negative_numbers = true, value_parser = parse_number)]
        final_exam: f64,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct GradeResult {
    scores: Scores,
    weights: WeightSet,
    average: f64,
    grade: LetterGrade,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: quiet stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_roster.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_roster.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    // stderr stays at warn by default so log lines don't interleave with prompts
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(layer_filter(std::env::var("RUST_LOG"), "warn"));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(layer_filter(std::env::var("RUST_LOG_JSON"), "debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let weights = cli.weights.to_weight_set()?;

    match cli.command.unwrap_or(Commands::Menu { report: None }) {
        Commands::Menu { report } => run_menu(weights, report.as_deref())?,
        Commands::Grade {
            midterm1,
            midterm2,
            final_exam,
            json,
        } => {
            let scores = Scores::new(midterm1, midterm2, final_exam);
            let avg = average(&scores, &weights);
            let result = GradeResult {
                scores,
                weights,
                average: avg,
                grade: LetterGrade::from_average(avg),
            };

            if json {
                println!("{}", to_json(&result)?);
            } else {
                println!("Average: {:.2}, Grade: {}", result.average, result.grade);
            }
        }
    }

    Ok(())
}

/// Builds a layer filter from an env var's value, falling back to `default`
/// when it is unset or does not parse. A bare level in the variable wins over
/// the default.
fn layer_filter(value: Result<String, std::env::VarError>, default: &str) -> EnvFilter {
    value
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Runs the interactive session on stdin/stdout, then optionally writes a report.
#[tracing::instrument(skip(weights))]
fn run_menu(weights: WeightSet, report: Option<&Path>) -> Result<()> {
    let mut store = RosterStore::with_weights(weights);

    {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Session::new(&mut store, stdin.lock(), stdout.lock()).run()?;
    }

    if let Some(path) = report {
        let sorted = store.list_sorted();
        write_report(path, sorted.students())?;
        info!(path = %path.display(), "Grade report saved");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_layer_filter_env_level_overrides_default() {
        let filter = layer_filter(Ok("debug".to_string()), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_layer_filter_falls_back_to_default() {
        let filter = layer_filter(Err(std::env::VarError::NotPresent), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = layer_filter(Ok("roster=notalevel".to_string()), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }
}
