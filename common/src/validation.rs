//! Client-side validation of the student form.
//!
//! Every editable field is trimmed and then checked against its bounds before
//! anything is sent to the store. Lengths are counted in characters. For each
//! field only the first failing rule is reported, in the order required,
//! email syntax, maximum length.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::student::StudentForm;

// Local part may not end with `.` or `'`; the leading-dot and double-dot
// rules are checked separately since the regex crate has no lookahead.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("email pattern compiles")
});

/// One of the four editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Course,
    EnrollmentId,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Course, Field::EnrollmentId];

    /// Maximum length in characters.
    pub fn max_len(self) -> usize {
        match self {
            Field::Name | Field::Course => 100,
            Field::Email => 255,
            Field::EnrollmentId => 50,
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Nome é obrigatório",
            Field::Email => "Email é obrigatório",
            Field::Course => "Curso é obrigatório",
            Field::EnrollmentId => "Matrícula é obrigatória",
        }
    }

    fn too_long_message(self) -> &'static str {
        match self {
            Field::Name => "Nome deve ter no máximo 100 caracteres",
            Field::Email => "Email deve ter no máximo 255 caracteres",
            Field::Course => "Curso deve ter no máximo 100 caracteres",
            Field::EnrollmentId => "Matrícula deve ter no máximo 50 caracteres",
        }
    }

    pub fn value(self, form: &StudentForm) -> &str {
        match self {
            Field::Name => &form.name,
            Field::Email => &form.email,
            Field::Course => &form.course,
            Field::EnrollmentId => &form.enrollment_id,
        }
    }

    pub fn value_mut(self, form: &mut StudentForm) -> &mut String {
        match self {
            Field::Name => &mut form.name,
            Field::Email => &mut form.email,
            Field::Course => &mut form.course,
            Field::EnrollmentId => &mut form.enrollment_id,
        }
    }
}

pub const INVALID_EMAIL: &str = "Email inválido";

/// Inline error messages keyed by field. Empty means the form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<&'static str>,
    email: Option<&'static str>,
    course: Option<&'static str>,
    enrollment_id: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        *self.slot(field)
    }

    pub fn set(&mut self, field: Field, message: Option<&'static str>) {
        *self.slot_mut(field) = message;
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    fn slot(&self, field: Field) -> &Option<&'static str> {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Course => &self.course,
            Field::EnrollmentId => &self.enrollment_id,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Course => &mut self.course,
            Field::EnrollmentId => &mut self.enrollment_id,
        }
    }
}

/// Checks a single raw value, returning the trimmed value or the message to show.
pub fn validate_field(field: Field, raw: &str) -> Result<String, &'static str> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(field.required_message());
    }
    if field == Field::Email && !is_email(value) {
        return Err(INVALID_EMAIL);
    }
    if value.chars().count() > field.max_len() {
        return Err(field.too_long_message());
    }
    Ok(value.to_string())
}

/// Validates the whole form.
///
/// Returns the trimmed form ready to submit, or every field's error.
pub fn validate(form: &StudentForm) -> Result<StudentForm, FieldErrors> {
    let mut trimmed = StudentForm::default();
    let mut errors = FieldErrors::default();

    for field in Field::ALL {
        match validate_field(field, field.value(form)) {
            Ok(value) => *field.value_mut(&mut trimmed) = value,
            Err(message) => errors.set(field, Some(message)),
        }
    }

    if errors.is_empty() {
        Ok(trimmed)
    } else {
        Err(errors)
    }
}

/// Email syntax check.
pub fn is_email(value: &str) -> bool {
    let local = value.split('@').next().unwrap_or_default();
    !local.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}
