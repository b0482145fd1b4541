//! Properties of the `AlunoForm` component.

use common::model::student::StudentForm;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AlunoFormProps {
    /// Values to start from. `None` starts every field empty (create mode).
    ///
    /// Only read when the form is mounted; later changes are ignored so that
    /// typed values survive re-renders of the parent.
    #[prop_or_default]
    pub initial: Option<StudentForm>,

    /// Receives the trimmed, validated values.
    pub on_submit: Callback<StudentForm>,

    /// Disables every input and the submit button, and switches the button
    /// label to the in-progress text.
    #[prop_or_default]
    pub loading: bool,
}
