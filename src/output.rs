//! Output formatting for student records.
//!
//! Supports the plain-text rendering, pretty-printing and JSON summaries.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::record::StudentRecord;

/// Per-subject line of a [`Summary`].
#[derive(Debug, Serialize)]
pub struct SubjectSummary {
    pub subject: String,
    pub lesson_grades: Vec<i64>,
    pub test_scores: Vec<i64>,
    pub test_mean: Option<f64>,
}

/// Serializable snapshot of a [`StudentRecord`].
#[derive(Debug, Serialize)]
pub struct Summary {
    pub generated_at: DateTime<Utc>,
    pub full_name: String,
    pub overall_mean: Option<f64>,
    pub subjects: Vec<SubjectSummary>,
}

impl Summary {
    pub fn from_record(record: &StudentRecord) -> Self {
        let subjects = record
            .subjects()
            .map(|book| {
                book.iter()
                    .map(|(name, r)| SubjectSummary {
                        subject: name.to_string(),
                        lesson_grades: r.lesson_grades().to_vec(),
                        test_scores: r.test_scores().to_vec(),
                        test_mean: r.test_mean(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Summary {
            generated_at: Utc::now(),
            full_name: record.full_name(),
            overall_mean: record.overall_mean(),
            subjects,
        }
    }
}

/// Output format for the rendered summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Logs a record using Rust's debug pretty-print format.
pub fn print_pretty(record: &StudentRecord) {
    debug!("{:#?}", record);
}

/// Renders a record in the requested format.
pub fn render(record: &StudentRecord, format: Format) -> Result<String> {
    Ok(match format {
        Format::Text => record.to_string(),
        Format::Json => serde_json::to_string_pretty(&Summary::from_record(record))?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::EstimateKind;
    use crate::subjects::SubjectBook;

    fn record() -> StudentRecord {
        let mut record = StudentRecord::with_identity("Ivan", "Ivanovich", "Ivanov").unwrap();
        record
            .set_subjects(SubjectBook::from_names(["math", "history"]))
            .unwrap();
        record
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&record());
    }

    #[test]
    fn test_summary_of_uninitialized_record() {
        let record = StudentRecord::with_identity("Ivan", "Ivanovich", "Ivanov").unwrap();
        let summary = Summary::from_record(&record);
        assert!(summary.subjects.is_empty());
        assert_eq!(summary.overall_mean, None);
    }

    #[test]
    fn test_render_json() {
        let mut record = record();
        record.record_estimate("math", 5, EstimateKind::Lesson).unwrap();
        record.record_estimate("math", 90, EstimateKind::Test).unwrap();

        let json = render(&record, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["full_name"], "Ivan Ivanovich Ivanov");
        assert_eq!(value["overall_mean"], 5.0);
        assert_eq!(value["subjects"][0]["subject"], "math");
        assert_eq!(value["subjects"][0]["test_mean"], 90.0);
        assert!(value["subjects"][1]["test_mean"].is_null());
    }

    #[test]
    fn test_render_text_matches_display() {
        let record = record();
        assert_eq!(render(&record, Format::Text).unwrap(), record.to_string());
    }
}
