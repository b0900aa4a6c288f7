//! Reference run: one student, three subjects, a fixed list of estimates.

use std::path::Path;

use crate::error::Result;
use crate::estimate::EstimateKind;
use crate::record::StudentRecord;

pub const NAME: &str = "Alexander";
pub const SECOND_NAME: &str = "Michailovich";
pub const SURNAME: &str = "Zagaynov";

/// Estimates applied in order by [`run`].
pub const ESTIMATES: &[(&str, i64, EstimateKind)] = &[
    ("русский язык", 3, EstimateKind::Lesson),
    ("русский язык", 5, EstimateKind::Lesson),
    ("математика", 4, EstimateKind::Lesson),
    ("информатика", 4, EstimateKind::Lesson),
    ("математика", 5, EstimateKind::Lesson),
    ("русский язык", 5, EstimateKind::Lesson),
    ("информатика", 3, EstimateKind::Lesson),
    ("математика", 5, EstimateKind::Lesson),
    ("русский язык", 3, EstimateKind::Lesson),
    ("математика", 4, EstimateKind::Lesson),
    ("математика", 68, EstimateKind::Test),
    ("математика", 99, EstimateKind::Test),
    ("русский язык", 29, EstimateKind::Test),
    ("русский язык", 100, EstimateKind::Test),
    ("русский язык", 18, EstimateKind::Test),
    ("информатика", 74, EstimateKind::Test),
    ("информатика", 39, EstimateKind::Test),
];

/// Builds the reference record from `lessons` and applies [`ESTIMATES`].
pub fn run(lessons: &Path) -> Result<StudentRecord> {
    let mut record = StudentRecord::new(NAME, SECOND_NAME, SURNAME, lessons)?;
    for &(subject, value, kind) in ESTIMATES {
        record.record_estimate(subject, value, kind)?;
    }
    Ok(record)
}
