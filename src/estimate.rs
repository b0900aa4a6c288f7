//! Estimate kinds and their scales.

use std::ops::RangeInclusive;
use std::str::FromStr;

use strum::{EnumString, IntoStaticStr};

use crate::error::{RecordError, Result};

/// Russian 5-point lesson scale.
pub const LESSON_RANGE: RangeInclusive<i64> = 2..=5;
/// Percentage test scale.
pub const TEST_RANGE: RangeInclusive<i64> = 0..=100;

/// What an estimate measures.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EstimateKind {
    /// Grade for classroom work, 2 to 5.
    #[default]
    #[strum(to_string = "lesson", serialize = "less")]
    Lesson,
    /// Test score, 0 to 100.
    Test,
}

impl EstimateKind {
    pub fn range(self) -> RangeInclusive<i64> {
        match self {
            EstimateKind::Lesson => LESSON_RANGE,
            EstimateKind::Test => TEST_RANGE,
        }
    }

    /// Ensures `value` lies on this kind's scale.
    pub fn check(self, value: i64) -> Result<()> {
        let range = self.range();
        if range.contains(&value) {
            Ok(())
        } else {
            Err(RecordError::OutOfRange {
                kind: self.into(),
                value,
                min: *range.start(),
                max: *range.end(),
            })
        }
    }

    /// Parses a kind name, rejecting anything other than `lesson`/`less`/`test`.
    pub fn parse(kind: &str) -> Result<Self> {
        EstimateKind::from_str(kind.trim()).map_err(|_| RecordError::UnknownKind {
            kind: kind.to_string(),
        })
    }
}

/// One `SUBJECT=VALUE[:KIND]` entry, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateEntry {
    pub subject: String,
    pub value: i64,
    pub kind: EstimateKind,
}

impl FromStr for EstimateEntry {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (subject, rest) = s
            .rsplit_once('=')
            .ok_or_else(|| format!("expected SUBJECT=VALUE[:KIND], got '{s}'"))?;
        let (value, kind) = match rest.split_once(':') {
            Some((value, kind)) => (
                value,
                EstimateKind::parse(kind).map_err(|e| e.to_string())?,
            ),
            None => (rest, EstimateKind::default()),
        };
        let value = value
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid estimate value '{value}': {e}"))?;

        Ok(EstimateEntry {
            subject: subject.trim().to_string(),
            value,
            kind,
        })
    }
}
