//! State of the student records page.
//!
//! The page is the single owner of the record list and of every piece of UI
//! state around it. The list is a cache of the remote table: it is replaced
//! wholesale by each fetch and never edited locally.

use common::filter::filter_students;
use common::format::{DateTime, FixedOffset, Utc};
use common::model::student::Student;
use num_format::{Locale, ToFormattedString};
use yew::Callback;

use crate::store::StudentStore;

pub struct AlunosPage {
    /// Store client, available once the host config has loaded.
    pub store: Option<StudentStore>,

    /// Last successfully fetched records, newest first.
    pub students: Vec<Student>,

    /// True until the first fetch (or config load) settles.
    pub loading: bool,

    /// Message of the last failed fetch, cleared by the next success.
    pub load_error: Option<String>,

    pub search_term: String,

    /// Record being edited. `None` while the form is in create mode.
    pub selected: Option<Student>,

    pub form_open: bool,

    /// Incremented on every opening of the form so a fresh form is mounted.
    pub form_session: u32,

    pub delete_open: bool,

    /// Id awaiting delete confirmation.
    pub delete_id: Option<String>,

    pub creating: bool,
    pub updating: bool,
    pub deleting: bool,

    /// Sequence number of the most recently issued fetch. Older responses
    /// are dropped.
    pub fetch_seq: u64,

    /// Viewer's UTC offset at a given instant, for date display.
    pub offset_at: Callback<DateTime<Utc>, FixedOffset>,

    /// Guard to run first-render initialization once.
    pub loaded: bool,
}

impl AlunosPage {
    pub fn new(offset_at: Callback<DateTime<Utc>, FixedOffset>) -> Self {
        Self {
            store: None,
            students: Vec::new(),
            loading: true,
            load_error: None,
            search_term: String::new(),
            selected: None,
            form_open: false,
            form_session: 0,
            delete_open: false,
            delete_id: None,
            creating: false,
            updating: false,
            deleting: false,
            fetch_seq: 0,
            offset_at,
            loaded: false,
        }
    }

    /// Records matching the current search term, in list order.
    pub fn visible(&self) -> Vec<Student> {
        filter_students(&self.students, &self.search_term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Whether a create or update request is in flight.
    pub fn saving(&self) -> bool {
        self.creating || self.updating
    }

    pub fn stats_line(&self) -> String {
        stats_line(self.visible().len(), self.students.len())
    }
}

/// `Mostrando {visible} de {total} alunos`, grouped the Brazilian way.
pub fn stats_line(visible: usize, total: usize) -> String {
    format!(
        "Mostrando {} de {} alunos",
        visible.to_formatted_string(&Locale::pt),
        total.to_formatted_string(&Locale::pt)
    )
}
