use common::model::store::StoreConfig;
use common::model::student::{Student, StudentForm};

use crate::notifications::Notification;
use crate::store::StoreError;

#[derive(Clone)]
pub enum Msg {
    ConfigLoaded(Result<StoreConfig, StoreError>),
    Fetched {
        seq: u64,
        result: Result<Vec<Student>, StoreError>,
    },
    SetSearch(String),
    NewStudent,
    Edit(Student),
    CloseForm,
    Submit(StudentForm),
    /// `session` is the form session the insert was submitted from.
    Created {
        session: u32,
        result: Result<(), StoreError>,
    },
    Updated {
        session: u32,
        result: Result<(), StoreError>,
    },
    AskDelete(String),
    CloseDelete,
    ConfirmDelete,
    /// `id` is the record the request targeted, which may no longer be the
    /// one awaiting confirmation.
    Deleted {
        id: String,
        result: Result<(), StoreError>,
    },
}

/// Side effect requested by the page in response to a message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(u64),
    Insert {
        session: u32,
        form: StudentForm,
    },
    Update {
        session: u32,
        id: String,
        form: StudentForm,
    },
    Delete(String),
    Notify(Notification),
}
