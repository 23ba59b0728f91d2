//! Per-request accumulation of field validation failures.
//!
//! Rules are composed by the caller and handed over as one boolean per
//! check; the [`Validator`] only records the messages of failed checks.

use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Field name → messages, in the order the checks failed.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validator {
    field_errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field` unless `ok`.
    pub fn check_field(&mut self, ok: bool, field: &str, message: impl Into<String>) {
        if ok {
            return;
        }
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// `Ok(())` when nothing failed, otherwise every recorded error at once.
    pub fn finish(self) -> Result<(), DomainError> {
        if self.valid() {
            Ok(())
        } else {
            Err(DomainError::validation(self.field_errors))
        }
    }
}

fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

pub fn not_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

pub fn min_chars(s: &str, n: usize) -> bool {
    trimmed_len(s) >= n
}

pub fn max_chars(s: &str, n: usize) -> bool {
    trimmed_len(s) <= n
}
