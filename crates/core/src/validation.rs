//! Field-level form validation.
//!
//! Forms are validated locally before anything is sent over the network.
//! A failed validation yields a [`FieldErrors`] map keyed by the wire name of
//! the field (e.g. `"apellidoPaterno"`), so callers can surface errors inline
//! next to the offending input.
//!
//! Semantics follow the usual form-validator conventions: length and format
//! rules only apply to non-empty values, `required` is the only rule that
//! rejects a blank value.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// A single rule violation on one field.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum FieldError {
    #[error("is required")]
    Required,

    #[error("must have at least {min} characters")]
    MinLength { min: usize },

    #[error("must have at most {max} characters")]
    MaxLength { max: usize },

    #[error("must be a valid email address")]
    Email,

    #[error("must be greater than zero")]
    Positive,

    #[error("must be one of: {allowed}")]
    OneOf { allowed: String },

    #[error("must be a valid date (YYYY-MM-DD)")]
    Date,
}

/// Validation outcome for a whole form: field name -> violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<FieldError>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.0.entry(field).or_default().push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Violations recorded for `field` (empty slice when the field is valid).
    pub fn get(&self, field: &str) -> &[FieldError] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: &str, error: &FieldError) -> bool {
        self.get(field).contains(error)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[FieldError])> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// `Ok(())` when no violation was recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, errors) in &self.0 {
            for error in errors {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field} {error}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Accumulates violations for a form.
///
/// ```ignore
/// let mut v = Validator::new();
/// v.text("dni", &form.dni).required().min_len(8).max_len(20);
/// v.text("email", &form.email).email().max_len(150);
/// v.finish()?;
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start checking a text field.
    pub fn text<'a>(&'a mut self, field: &'static str, value: &'a str) -> TextRules<'a> {
        TextRules {
            errors: &mut self.errors,
            field,
            value,
        }
    }

    /// Record `Required` when `value` is absent.
    pub fn present<T>(&mut self, field: &'static str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.errors.add(field, FieldError::Required);
        }
        self
    }

    /// Record `Required` when absent, `Positive` when not strictly positive.
    pub fn positive(&mut self, field: &'static str, value: Option<f64>) -> &mut Self {
        match value {
            None => self.errors.add(field, FieldError::Required),
            Some(v) if !(v > 0.0) || !v.is_finite() => self.errors.add(field, FieldError::Positive),
            Some(_) => {}
        }
        self
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        self.errors.into_result()
    }
}

/// Rules applicable to a text input.
pub struct TextRules<'a> {
    errors: &'a mut FieldErrors,
    field: &'static str,
    value: &'a str,
}

impl TextRules<'_> {
    fn blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    fn chars(&self) -> usize {
        self.value.trim().chars().count()
    }

    pub fn required(self) -> Self {
        if self.blank() {
            self.errors.add(self.field, FieldError::Required);
        }
        self
    }

    pub fn min_len(self, min: usize) -> Self {
        if !self.blank() && self.chars() < min {
            self.errors.add(self.field, FieldError::MinLength { min });
        }
        self
    }

    pub fn max_len(self, max: usize) -> Self {
        if self.chars() > max {
            self.errors.add(self.field, FieldError::MaxLength { max });
        }
        self
    }

    pub fn email(self) -> Self {
        if !self.blank() && !is_valid_email(self.value.trim()) {
            self.errors.add(self.field, FieldError::Email);
        }
        self
    }

    pub fn one_of(self, allowed: &[&str]) -> Self {
        if !self.blank() && !allowed.contains(&self.value.trim()) {
            self.errors.add(
                self.field,
                FieldError::OneOf {
                    allowed: allowed.join(", "),
                },
            );
        }
        self
    }

    /// ISO calendar date (`YYYY-MM-DD`), only checked when non-blank.
    pub fn date(self) -> Self {
        if !self.blank() && crate::timestamp::parse_date(self.value).is_none() {
            self.errors.add(self.field, FieldError::Date);
        }
        self
    }
}

/// Structural email check: `local@domain`, no whitespace, dot-separated
/// domain labels made of alphanumerics and inner hyphens.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
