use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A student record as stored in the remote `alunos` table.
///
/// The store owns `id` and `created_at`; the frontend never fills them in.
/// Field names follow the table's Portuguese column names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Opaque identifier assigned by the store on insert.
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "matricula")]
    pub enrollment_id: String,
    /// Creation timestamp assigned by the store, used for list ordering.
    #[serde(rename = "data_criacao")]
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// The editable part of the record, used to pre-fill the edit form.
    pub fn form(&self) -> StudentForm {
        StudentForm {
            name: self.name.clone(),
            email: self.email.clone(),
            course: self.course.clone(),
            enrollment_id: self.enrollment_id.clone(),
        }
    }
}

/// The four editable fields of a [`Student`].
///
/// This is both what the form collects and the body sent on insert/update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentForm {
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "curso")]
    pub course: String,
    #[serde(rename = "matricula")]
    pub enrollment_id: String,
}
