//! A single student's academic record.

use std::fmt;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{RecordError, Result};
use crate::estimate::EstimateKind;
use crate::identity::{Identity, IdentityField};
use crate::subjects::{SubjectBook, SubjectRecord, WriteOnce};
use crate::utility::mean;

/// Identity, subject book and running means for one student.
///
/// The record is uninitialized until its subject book is assigned, which
/// can happen only once. Every successful estimate immediately refreshes
/// the affected mean.
#[derive(Debug, Clone)]
pub struct StudentRecord {
    identity: Identity,
    subjects: WriteOnce<SubjectBook>,
    overall_mean: Option<f64>,
}

impl StudentRecord {
    /// Validates the identity and loads the subject book from `lessons`.
    pub fn new(name: &str, second_name: &str, surname: &str, lessons: &Path) -> Result<Self> {
        let mut record = Self::with_identity(name, second_name, surname)?;
        record.load_subjects(lessons)?;
        Ok(record)
    }

    /// Creates a record with no subject book yet.
    pub fn with_identity(name: &str, second_name: &str, surname: &str) -> Result<Self> {
        Ok(Self {
            identity: Identity::new(name, second_name, surname)?,
            subjects: WriteOnce::default(),
            overall_mean: None,
        })
    }

    pub fn name(&self) -> &str {
        self.identity.get(IdentityField::Name)
    }

    pub fn second_name(&self) -> &str {
        self.identity.get(IdentityField::SecondName)
    }

    pub fn surname(&self) -> &str {
        self.identity.get(IdentityField::Surname)
    }

    pub fn full_name(&self) -> String {
        self.identity.full_name()
    }

    pub fn set_name(&mut self, value: &str) -> Result<()> {
        self.set_field(IdentityField::Name, value)
    }

    pub fn set_second_name(&mut self, value: &str) -> Result<()> {
        self.set_field(IdentityField::SecondName, value)
    }

    pub fn set_surname(&mut self, value: &str) -> Result<()> {
        self.set_field(IdentityField::Surname, value)
    }

    pub fn set_field(&mut self, which: IdentityField, value: &str) -> Result<()> {
        self.identity.field_mut(which).set(value)
    }

    /// Assigns an identity field from raw bytes that must be UTF-8 text.
    pub fn set_field_raw(&mut self, which: IdentityField, bytes: &[u8]) -> Result<()> {
        self.identity.field_mut(which).assign_raw(bytes)
    }

    /// Always fails with [`RecordError::FieldDeletion`].
    pub fn delete_field(&mut self, which: IdentityField) -> Result<()> {
        self.identity.field_mut(which).delete()
    }

    /// Loads the subject book from a CSV file. Fails if a book is already set.
    pub fn load_subjects(&mut self, lessons: &Path) -> Result<()> {
        if self.subjects.is_set() {
            warn!(path = %lessons.display(), "Subject list already defined");
            return Err(RecordError::SubjectsAlreadySet);
        }
        let book = SubjectBook::load(lessons)?;
        self.set_subjects(book)
    }

    /// Assigns the subject book. Fails if a book is already set.
    pub fn set_subjects(&mut self, book: SubjectBook) -> Result<()> {
        let count = book.len();
        if self.subjects.set(book).is_err() {
            warn!("Subject list already defined");
            return Err(RecordError::SubjectsAlreadySet);
        }
        self.overall_mean = None;
        info!(student = %self.full_name(), subjects = count, "Record activated");
        Ok(())
    }

    /// The subject book, `None` before it has been loaded.
    pub fn subjects(&self) -> Option<&SubjectBook> {
        self.subjects.get()
    }

    pub fn subject(&self, name: &str) -> Option<&SubjectRecord> {
        self.subjects.get().and_then(|book| book.get(name))
    }

    pub fn is_active(&self) -> bool {
        self.subjects.is_set()
    }

    /// Mean of all lesson grades, `None` until the first grade is recorded.
    pub fn overall_mean(&self) -> Option<f64> {
        self.overall_mean
    }

    /// Recomputes the mean of all lesson grades across every subject.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::EmptyMean`] when no lesson grade exists.
    pub fn compute_overall_mean(&self) -> Result<f64> {
        let grades = self
            .subjects
            .get()
            .map(SubjectBook::all_lesson_grades)
            .unwrap_or_default();
        mean(&grades)
    }

    /// Records an estimate of the given kind for `subject`.
    ///
    /// Lesson grades refresh the overall mean; test scores refresh the
    /// subject's own test mean. Nothing is stored if any check fails.
    pub fn record_estimate(&mut self, subject: &str, value: i64, kind: EstimateKind) -> Result<()> {
        let Some(entry) = self.subjects.get_mut().and_then(|b| b.get_mut(subject)) else {
            warn!(subject, "Subject is not studied");
            return Err(RecordError::UnknownSubject {
                subject: subject.to_string(),
            });
        };
        kind.check(value)?;

        match kind {
            EstimateKind::Lesson => {
                entry.lesson_grades.push(value);
                let overall = self.compute_overall_mean()?;
                self.overall_mean = Some(overall);
                debug!(subject, value, overall, "Lesson grade recorded");
            }
            EstimateKind::Test => {
                entry.test_scores.push(value);
                let test_mean = mean(&entry.test_scores)?;
                entry.test_mean = Some(test_mean);
                debug!(subject, value, test_mean, "Test score recorded");
            }
        }

        Ok(())
    }

    /// Like [`record_estimate`](Self::record_estimate) with the kind given by name.
    pub fn record_estimate_as(&mut self, subject: &str, value: i64, kind: &str) -> Result<()> {
        let kind = EstimateKind::parse(kind)?;
        self.record_estimate(subject, value, kind)
    }
}

fn fmt_mean(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:?}"),
        None => "None".to_string(),
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student averages:")?;
        writeln!(f, "    full name = \"{}\",", self.full_name())?;
        writeln!(f, "    overall mean = {}", fmt_mean(self.overall_mean))?;
        if let Some(book) = self.subjects.get() {
            for (name, record) in book.iter() {
                writeln!(f, " test mean for {} = {}", name, fmt_mean(record.test_mean))?;
            }
        }
        Ok(())
    }
}
