//! Validated identity fields.
//!
//! A [`ValidatedField`] binds a field name to its backing value and runs a
//! validator on every assignment. Deletion is never allowed.

use tracing::warn;

use crate::error::{RecordError, Result};

/// Checks a candidate value for the named field.
pub type Validator = fn(field: &'static str, value: &str) -> Result<()>;

/// A named string property whose every write passes through a validator.
#[derive(Debug, Clone)]
pub struct ValidatedField {
    field: &'static str,
    value: Option<String>,
    validator: Validator,
}

impl ValidatedField {
    pub fn new(field: &'static str, validator: Validator) -> Self {
        Self {
            field,
            value: None,
            validator,
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Current value, `None` until the first successful assignment.
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Validates `value` and stores it. On failure the previous value is kept.
    pub fn set(&mut self, value: &str) -> Result<()> {
        if let Err(e) = (self.validator)(self.field, value) {
            warn!(field = self.field, error = %e, "Rejected assignment");
            return Err(e);
        }
        self.value = Some(value.to_string());
        Ok(())
    }

    /// Assigns from raw bytes, which must decode as UTF-8 text.
    pub fn assign_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let text = std::str::from_utf8(bytes).map_err(|_| RecordError::NotText {
            field: self.field,
        })?;
        self.set(text)
    }

    /// Always fails: identity values are permanent once set.
    pub fn delete(&mut self) -> Result<()> {
        warn!(field = self.field, "Rejected deletion");
        Err(RecordError::FieldDeletion { field: self.field })
    }
}

/// Accepts a single alphabetic word in title case, e.g. `Alexander`.
pub fn title_word(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(|c| c.is_alphabetic() && !c.is_numeric()) {
        return Err(RecordError::NotAlphabetic {
            field,
            value: value.to_string(),
        });
    }

    let mut chars = value.chars();
    let head_upper = chars.next().is_some_and(char::is_uppercase);
    if !head_upper || !chars.all(char::is_lowercase) {
        return Err(RecordError::NotTitleCase {
            field,
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Which of the three identity fields an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    SecondName,
    Surname,
}

/// First name, patronymic and surname, each a title-cased word.
#[derive(Debug, Clone)]
pub struct Identity {
    name: ValidatedField,
    second_name: ValidatedField,
    surname: ValidatedField,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            name: ValidatedField::new("name", title_word),
            second_name: ValidatedField::new("second_name", title_word),
            surname: ValidatedField::new("surname", title_word),
        }
    }
}

impl Identity {
    pub fn new(name: &str, second_name: &str, surname: &str) -> Result<Self> {
        let mut identity = Self::default();
        identity.name.set(name)?;
        identity.second_name.set(second_name)?;
        identity.surname.set(surname)?;
        Ok(identity)
    }

    pub fn field(&self, which: IdentityField) -> &ValidatedField {
        match which {
            IdentityField::Name => &self.name,
            IdentityField::SecondName => &self.second_name,
            IdentityField::Surname => &self.surname,
        }
    }

    pub fn field_mut(&mut self, which: IdentityField) -> &mut ValidatedField {
        match which {
            IdentityField::Name => &mut self.name,
            IdentityField::SecondName => &mut self.second_name,
            IdentityField::Surname => &mut self.surname,
        }
    }

    pub fn get(&self, which: IdentityField) -> &str {
        self.field(which).get().unwrap_or_default()
    }

    /// `"Name SecondName Surname"`.
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.get(IdentityField::Name),
            self.get(IdentityField::SecondName),
            self.get(IdentityField::Surname)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;

    #[test]
    fn test_title_word_accepts() {
        for word in ["Alexander", "A", "Загайнов", "Élodie"] {
            assert!(title_word("name", word).is_ok(), "{word}");
        }
    }

    #[test]
    fn test_title_word_rejects_non_alphabetic() {
        for word in ["", "Alex1", "Anne-Marie", "Ivan Petrov", "Ivan.", "Ⅳ", "Ⅻⅰ"] {
            let err = title_word("name", word).unwrap_err();
            assert!(
                matches!(err, RecordError::NotAlphabetic { .. }),
                "{word}: {err}"
            );
        }
    }

    #[test]
    fn test_title_word_rejects_wrong_case() {
        for word in ["alexander", "ALEXANDER", "AlexAnder", "aLEX"] {
            let err = title_word("name", word).unwrap_err();
            assert!(
                matches!(err, RecordError::NotTitleCase { .. }),
                "{word}: {err}"
            );
        }
    }

    #[test]
    fn test_failed_set_keeps_previous_value() {
        let mut field = ValidatedField::new("surname", title_word);
        field.set("Zagaynov").unwrap();

        assert!(field.set("zagaynov").is_err());
        assert!(field.set("Zag4ynov").is_err());
        assert_eq!(field.get(), Some("Zagaynov"));
    }

    #[test]
    fn test_assign_raw_rejects_invalid_utf8() {
        let mut field = ValidatedField::new("name", title_word);
        let err = field.assign_raw(&[0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, RecordError::NotText { field: "name" }));
        assert_eq!(err.category(), ErrorCategory::Type);
        assert_eq!(field.get(), None);

        field.assign_raw("Ivan".as_bytes()).unwrap();
        assert_eq!(field.get(), Some("Ivan"));
    }

    #[test]
    fn test_delete_always_fails() {
        let mut field = ValidatedField::new("name", title_word);
        assert!(matches!(
            field.delete(),
            Err(RecordError::FieldDeletion { field: "name" })
        ));

        field.set("Ivan").unwrap();
        assert!(field.delete().is_err());
        assert_eq!(field.get(), Some("Ivan"));
    }

    #[test]
    fn test_identity_full_name() {
        let identity = Identity::new("Alexander", "Michailovich", "Zagaynov").unwrap();
        assert_eq!(identity.full_name(), "Alexander Michailovich Zagaynov");
    }

    #[test]
    fn test_identity_rejects_bad_second_name() {
        let err = Identity::new("Alexander", "michailovich", "Zagaynov").unwrap_err();
        assert!(matches!(
            err,
            RecordError::NotTitleCase {
                field: "second_name",
                ..
            }
        ));
    }
}
