//! CLI entry point for the student record tool.
//!
//! Runs the reference scenario by default, or applies estimates given on the
//! command line, then prints the student's averages.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use student_record::estimate::EstimateEntry;
use student_record::output::{Format, print_pretty, render};
use student_record::{StudentRecord, scenario};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "student_record")]
#[command(about = "Track a student's grades and test scores", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference student with a fixed set of estimates
    Demo {
        /// CSV file with one subject per row
        #[arg(short, long, default_value = "lessons.csv")]
        lessons: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Record estimates for a student and print the averages
    Record {
        #[arg(long)]
        name: String,

        #[arg(long)]
        second_name: String,

        #[arg(long)]
        surname: String,

        /// CSV file with one subject per row
        #[arg(short, long, default_value = "lessons.csv")]
        lessons: PathBuf,

        /// Estimate as SUBJECT=VALUE[:KIND], KIND is "lesson" (default) or "test"
        #[arg(short, long = "estimate", value_name = "SUBJECT=VALUE[:KIND]")]
        estimates: Vec<EstimateEntry>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/student_record.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("student_record.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let (record, format) = match cli.command {
        None => (scenario::run(Path::new("lessons.csv"))?, Format::Text),
        Some(Commands::Demo { lessons, format }) => (scenario::run(&lessons)?, format),
        Some(Commands::Record {
            name,
            second_name,
            surname,
            lessons,
            estimates,
            format,
        }) => {
            let mut record = StudentRecord::new(&name, &second_name, &surname, &lessons)?;
            for entry in &estimates {
                record.record_estimate(&entry.subject, entry.value, entry.kind)?;
            }
            info!(count = estimates.len(), "Estimates recorded");
            (record, format)
        }
    };

    print_pretty(&record);
    println!("{}", render(&record, format)?);

    Ok(())
}
