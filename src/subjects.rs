//! Subject book: the ordered set of studied subjects and their scores.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::Result;

/// Scores collected for one subject.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectRecord {
    pub(crate) lesson_grades: Vec<i64>,
    pub(crate) test_scores: Vec<i64>,
    pub(crate) test_mean: Option<f64>,
}

impl SubjectRecord {
    pub fn lesson_grades(&self) -> &[i64] {
        &self.lesson_grades
    }

    pub fn test_scores(&self) -> &[i64] {
        &self.test_scores
    }

    /// Mean of this subject's test scores, `None` before the first test.
    pub fn test_mean(&self) -> Option<f64> {
        self.test_mean
    }
}

/// Subjects in file order, each with its own [`SubjectRecord`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectBook {
    entries: IndexMap<String, SubjectRecord>,
}

impl SubjectBook {
    /// Builds an empty-score book from subject names, keeping first occurrence order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: IndexMap<String, SubjectRecord> = IndexMap::new();
        for name in names {
            entries.entry(name.into()).or_default();
        }
        Self { entries }
    }

    /// Reads subject names from the first column of a headerless CSV file.
    ///
    /// The file handle is dropped on every return path.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let book = Self::from_reader(file)?;
        debug!(subjects = book.len(), "Subject list loaded");
        Ok(book)
    }

    /// Parses subject names from CSV data. Extra columns are ignored and
    /// rows with a blank first field are skipped.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut names = Vec::new();
        for row in rdr.records() {
            let row = row?;
            match row.get(0).map(str::trim) {
                Some(name) if !name.is_empty() => names.push(name.to_string()),
                _ => warn!(
                    line = row.position().map(|p| p.line()),
                    "Skipping row without subject"
                ),
            }
        }

        Ok(Self::from_names(names))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.entries.contains_key(subject)
    }

    pub fn get(&self, subject: &str) -> Option<&SubjectRecord> {
        self.entries.get(subject)
    }

    pub(crate) fn get_mut(&mut self, subject: &str) -> Option<&mut SubjectRecord> {
        self.entries.get_mut(subject)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubjectRecord)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every lesson grade across all subjects, in subject order.
    pub fn all_lesson_grades(&self) -> Vec<i64> {
        self.entries
            .values()
            .flat_map(|r| r.lesson_grades.iter().copied())
            .collect()
    }
}

/// A value that can be assigned exactly once.
#[derive(Debug, Clone)]
pub struct WriteOnce<T> {
    value: Option<T>,
}

impl<T> Default for WriteOnce<T> {
    fn default() -> Self {
        Self { value: None }
    }
}

impl<T> WriteOnce<T> {
    /// Stores `value` unless the cell is already populated, in which case
    /// the rejected value is handed back.
    pub fn set(&mut self, value: T) -> std::result::Result<(), T> {
        if self.value.is_some() {
            return Err(value);
        }
        self.value = Some(value);
        Ok(())
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_mut()
    }

    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(name)
    }

    #[test]
    fn test_from_reader_first_column_in_order() {
        let data = "русский язык,Иванова\nматематика,Петров,extra\nинформатика\n";
        let book = SubjectBook::from_reader(data.as_bytes()).unwrap();

        let names: Vec<_> = book.names().collect();
        assert_eq!(names, vec!["русский язык", "математика", "информатика"]);
        for (_, record) in book.iter() {
            assert!(record.lesson_grades().is_empty());
            assert!(record.test_scores().is_empty());
            assert_eq!(record.test_mean(), None);
        }
    }

    #[test]
    fn test_from_reader_skips_blank_and_duplicates() {
        let data = "math\n ,x\nphysics\nmath\n";
        let book = SubjectBook::from_reader(data.as_bytes()).unwrap();

        let names: Vec<_> = book.names().collect();
        assert_eq!(names, vec!["math", "physics"]);
    }

    #[test]
    fn test_first_row_is_data() {
        let book = SubjectBook::from_reader("subject\nmath\n".as_bytes()).unwrap();
        assert!(book.contains("subject"));
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SubjectBook::load(&temp_path("student_record_missing.csv")).unwrap_err();
        assert!(matches!(err, RecordError::Io(_)));
    }

    #[test]
    fn test_load_file() {
        let path = temp_path("student_record_test_load.csv");
        fs::write(&path, "math\nhistory\n").unwrap();

        let book = SubjectBook::load(&path).unwrap();
        assert_eq!(book.len(), 2);
        assert!(book.contains("history"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_once() {
        let mut cell = WriteOnce::default();
        assert!(cell.get().is_none());

        cell.set(1).unwrap();
        assert_eq!(cell.set(2), Err(2));
        assert_eq!(cell.get(), Some(&1));
    }
}
