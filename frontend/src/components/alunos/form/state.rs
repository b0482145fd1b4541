//! Form state: the values being typed and the inline errors.
//!
//! Validation first runs on a submit attempt. From then on each edited field
//! is re-checked as it changes, so an error disappears as soon as the value
//! becomes valid.

use common::model::student::StudentForm;
use common::validation::{validate, validate_field, Field, FieldErrors};

pub struct AlunoForm {
    /// Raw values as typed, untrimmed.
    pub values: StudentForm,
    pub errors: FieldErrors,
    /// Set by the first submit attempt; enables validation while typing.
    pub attempted: bool,
}

impl AlunoForm {
    pub fn new(initial: Option<StudentForm>) -> Self {
        Self {
            values: initial.unwrap_or_default(),
            errors: FieldErrors::default(),
            attempted: false,
        }
    }

    pub fn input(&mut self, field: Field, value: String) {
        if self.attempted {
            self.errors.set(field, validate_field(field, &value).err());
        }
        *field.value_mut(&mut self.values) = value;
    }

    /// Validates everything. Returns the trimmed values when the form may be
    /// submitted, otherwise records the errors and returns `None`.
    pub fn submit(&mut self) -> Option<StudentForm> {
        self.attempted = true;
        match validate(&self.values) {
            Ok(clean) => {
                self.errors = FieldErrors::default();
                Some(clean)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
