//! Update logic for the student records page.
//!
//! Split in two, Elm style:
//! - `reduce` applies a `Msg` to the page state and returns the effects it
//!   asks for (store requests, notifications). It never touches the network
//!   or the DOM, which keeps every transition unit-testable.
//! - `update` runs those effects: store requests are spawned on the browser
//!   event loop and their results come back as `Created`, `Fetched`, ...
//!
//! Dialog flow: `closed → open → submitting → closed` on success, or back to
//! `open` with an error notification on failure. While a mutation is in
//! flight a second submit/confirm produces no request. A completion only
//! closes the dialog it was started from: the form session or the delete id
//! must still match.

use common::model::student::StudentForm;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::notifications::{Notification, Severity};
use crate::store::{StoreError, StudentStore};

use super::messages::{Effect, Msg};
use super::state::AlunosPage;

pub fn update(page: &mut AlunosPage, ctx: &Context<AlunosPage>, msg: Msg) -> bool {
    let effects = reduce(page, msg);
    for effect in effects {
        run(page.store.clone(), ctx, effect);
    }
    true
}

/// Applies `msg` to `page` and returns the side effects to perform.
pub fn reduce(page: &mut AlunosPage, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::ConfigLoaded(Ok(config)) => {
            page.store = Some(StudentStore::new(config));
            vec![next_fetch(page)]
        }
        Msg::ConfigLoaded(Err(err)) => {
            page.loading = false;
            page.load_error = Some(err.to_string());
            vec![failure("Erro ao carregar alunos", &err, "Não foi possível carregar os alunos.")]
        }
        Msg::Fetched { seq, result } => {
            if seq != page.fetch_seq {
                return Vec::new();
            }
            page.loading = false;
            match result {
                Ok(students) => {
                    page.students = students;
                    page.load_error = None;
                    Vec::new()
                }
                Err(err) => {
                    page.load_error = Some(err.to_string());
                    vec![failure("Erro ao carregar alunos", &err, "Não foi possível carregar os alunos.")]
                }
            }
        }
        Msg::SetSearch(term) => {
            page.search_term = term;
            Vec::new()
        }
        Msg::NewStudent => {
            page.selected = None;
            open_form(page);
            Vec::new()
        }
        Msg::Edit(student) => {
            page.selected = Some(student);
            open_form(page);
            Vec::new()
        }
        Msg::CloseForm => {
            page.form_open = false;
            Vec::new()
        }
        Msg::Submit(form) => submit(page, form),
        Msg::Created { session, result } => {
            page.creating = false;
            match result {
                Ok(()) => {
                    if session == page.form_session {
                        page.form_open = false;
                    }
                    vec![
                        Effect::Notify(Notification::success("Aluno cadastrado com sucesso.")),
                        next_fetch(page),
                    ]
                }
                Err(err) => vec![failure(
                    "Erro ao cadastrar",
                    &err,
                    "Ocorreu um erro ao cadastrar o aluno.",
                )],
            }
        }
        Msg::Updated { session, result } => {
            page.updating = false;
            match result {
                Ok(()) => {
                    if session == page.form_session {
                        page.form_open = false;
                        page.selected = None;
                    }
                    vec![
                        Effect::Notify(Notification::success("Aluno atualizado com sucesso.")),
                        next_fetch(page),
                    ]
                }
                Err(err) => vec![failure(
                    "Erro ao atualizar",
                    &err,
                    "Ocorreu um erro ao atualizar o aluno.",
                )],
            }
        }
        Msg::AskDelete(id) => {
            page.delete_id = Some(id);
            page.delete_open = true;
            Vec::new()
        }
        Msg::CloseDelete => {
            page.delete_open = false;
            Vec::new()
        }
        Msg::ConfirmDelete => {
            if page.deleting {
                return Vec::new();
            }
            match page.delete_id.clone() {
                Some(id) => {
                    page.deleting = true;
                    vec![Effect::Delete(id)]
                }
                None => Vec::new(),
            }
        }
        Msg::Deleted { id, result } => {
            page.deleting = false;
            match result {
                Ok(()) => {
                    if page.delete_id.as_deref() == Some(id.as_str()) {
                        page.delete_open = false;
                        page.delete_id = None;
                    }
                    vec![
                        Effect::Notify(Notification::success("Aluno excluído com sucesso.")),
                        next_fetch(page),
                    ]
                }
                Err(err) => vec![failure(
                    "Erro ao excluir",
                    &err,
                    "Ocorreu um erro ao excluir o aluno.",
                )],
            }
        }
    }
}

fn submit(page: &mut AlunosPage, form: StudentForm) -> Vec<Effect> {
    if page.saving() {
        return Vec::new();
    }
    let session = page.form_session;
    match &page.selected {
        Some(student) => {
            page.updating = true;
            vec![Effect::Update {
                session,
                id: student.id.clone(),
                form,
            }]
        }
        None => {
            page.creating = true;
            vec![Effect::Insert { session, form }]
        }
    }
}

fn open_form(page: &mut AlunosPage) {
    page.form_open = true;
    page.form_session = page.form_session.wrapping_add(1);
}

fn next_fetch(page: &mut AlunosPage) -> Effect {
    page.fetch_seq += 1;
    Effect::Fetch(page.fetch_seq)
}

fn failure(title: &str, err: &StoreError, fallback: &str) -> Effect {
    let message = err.to_string();
    let description = if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    };
    Effect::Notify(Notification::failure(title, description))
}

fn run(store: Option<StudentStore>, ctx: &Context<AlunosPage>, effect: Effect) {
    let link = ctx.link().clone();

    match effect {
        Effect::Notify(notification) => {
            if notification.severity == Severity::Destructive {
                error!(format!("{}: {}", notification.title, notification.description));
            }
            notification.show();
        }
        Effect::Fetch(seq) => spawn_local(async move {
            let result = match store {
                Some(store) => store.list().await,
                None => Err(StoreError::NotConfigured),
            };
            if let Ok(students) = &result {
                log!(format!("Fetched {} students", students.len()));
            }
            link.send_message(Msg::Fetched { seq, result });
        }),
        Effect::Insert { session, form } => spawn_local(async move {
            let result = match store {
                Some(store) => store.insert(&form).await,
                None => Err(StoreError::NotConfigured),
            };
            link.send_message(Msg::Created { session, result });
        }),
        Effect::Update { session, id, form } => spawn_local(async move {
            let result = match store {
                Some(store) => store.update(&id, &form).await,
                None => Err(StoreError::NotConfigured),
            };
            link.send_message(Msg::Updated { session, result });
        }),
        Effect::Delete(id) => spawn_local(async move {
            let result = match store {
                Some(store) => store.delete(&id).await,
                None => Err(StoreError::NotConfigured),
            };
            link.send_message(Msg::Deleted { id, result });
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::store::StoreConfig;
    use common::format::{utc, DateTime, FixedOffset, Utc};
    use common::model::student::Student;
    use serde_json::json;

    fn student(id: &str, name: &str, course: &str, enrollment_id: &str) -> Student {
        serde_json::from_value(json!({
            "id": id,
            "nome": name,
            "email": format!("{}@escola.br", enrollment_id.to_lowercase()),
            "curso": course,
            "matricula": enrollment_id,
            "data_criacao": "2024-05-01T09:00:00+00:00"
        }))
        .unwrap()
    }

    fn form(course: &str) -> StudentForm {
        StudentForm {
            name: "Ana Souza".into(),
            email: "ana@escola.br".into(),
            course: course.into(),
            enrollment_id: "A001".into(),
        }
    }

    fn config() -> StoreConfig {
        StoreConfig {
            url: "https://xyz.supabase.co".into(),
            anon_key: "public-key".into(),
            table: "alunos".into(),
        }
    }

    /// A page that has loaded its config and a first list.
    fn loaded_page(students: Vec<Student>) -> AlunosPage {
        let mut page = AlunosPage::new(utc_offsets());
        let effects = reduce(&mut page, Msg::ConfigLoaded(Ok(config())));
        assert_eq!(effects, vec![Effect::Fetch(1)]);
        reduce(
            &mut page,
            Msg::Fetched {
                seq: 1,
                result: Ok(students),
            },
        );
        page
    }

    fn utc_offsets() -> Callback<DateTime<Utc>, FixedOffset> {
        Callback::from(|_| utc())
    }

    fn created(session: u32) -> Msg {
        Msg::Created {
            session,
            result: Ok(()),
        }
    }

    fn updated(session: u32, result: Result<(), StoreError>) -> Msg {
        Msg::Updated { session, result }
    }

    fn deleted(id: &str, result: Result<(), StoreError>) -> Msg {
        Msg::Deleted {
            id: id.into(),
            result,
        }
    }

    fn api_error(message: &str) -> StoreError {
        StoreError::Api {
            status: 400,
            message: message.into(),
        }
    }

    fn has_fetch(effects: &[Effect]) -> bool {
        effects.iter().any(|e| matches!(e, Effect::Fetch(_)))
    }

    fn notification(effects: &[Effect]) -> Option<&Notification> {
        effects.iter().find_map(|e| match e {
            Effect::Notify(n) => Some(n),
            _ => None,
        })
    }

    #[test]
    fn config_load_triggers_first_fetch() {
        let page = loaded_page(vec![student("1", "Ana", "Engenharia", "A001")]);
        assert!(page.store.is_some());
        assert!(!page.loading);
        assert_eq!(page.students.len(), 1);
    }

    #[test]
    fn config_failure_stops_loading_and_notifies() {
        let mut page = AlunosPage::new(utc_offsets());
        let effects = reduce(
            &mut page,
            Msg::ConfigLoaded(Err(api_error("Banco de dados não configurado"))),
        );

        assert!(!page.loading);
        assert!(page.students.is_empty());
        assert_eq!(page.load_error.as_deref(), Some("Banco de dados não configurado"));
        let n = notification(&effects).unwrap();
        assert_eq!(n.title, "Erro ao carregar alunos");
        assert_eq!(n.severity, Severity::Destructive);
    }

    #[test]
    fn fetch_failure_keeps_previous_list() {
        let mut page = loaded_page(vec![student("1", "Ana", "Engenharia", "A001")]);
        let effects = reduce(&mut page, Msg::Submit(form("Direito")));
        assert_eq!(effects.len(), 1);
        let effects = reduce(&mut page, created(0));
        let seq = page.fetch_seq;
        assert!(effects.contains(&Effect::Fetch(seq)));

        let effects = reduce(
            &mut page,
            Msg::Fetched {
                seq,
                result: Err(StoreError::Network("offline".into())),
            },
        );
        assert_eq!(page.students.len(), 1);
        assert!(page.load_error.is_some());
        assert_eq!(notification(&effects).unwrap().severity, Severity::Destructive);
    }

    #[test]
    fn stale_fetch_response_is_dropped() {
        let mut page = AlunosPage::new(utc_offsets());
        reduce(&mut page, Msg::ConfigLoaded(Ok(config())));
        reduce(&mut page, Msg::Submit(form("Direito")));
        reduce(&mut page, created(0));
        assert_eq!(page.fetch_seq, 2);

        reduce(
            &mut page,
            Msg::Fetched {
                seq: 2,
                result: Ok(vec![
                    student("2", "Ana", "Direito", "A001"),
                    student("1", "Bruno", "Engenharia", "B002"),
                ]),
            },
        );
        reduce(
            &mut page,
            Msg::Fetched {
                seq: 1,
                result: Ok(Vec::new()),
            },
        );

        assert_eq!(page.students.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_partial_match() {
        let mut page = loaded_page(vec![
            student("1", "Ana", "Engenharia", "A001"),
            student("2", "Bruno", "Direito", "B002"),
        ]);

        reduce(&mut page, Msg::SetSearch("a00".into()));
        let visible = page.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].enrollment_id, "A001");
        assert_eq!(page.stats_line(), "Mostrando 1 de 2 alunos");

        reduce(&mut page, Msg::SetSearch(String::new()));
        let ids: Vec<_> = page.visible().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn create_success_closes_dialog_notifies_and_refetches() {
        let mut page = loaded_page(Vec::new());

        reduce(&mut page, Msg::NewStudent);
        assert!(page.form_open);
        assert!(page.selected.is_none());
        assert_eq!(page.form_session, 1);

        let effects = reduce(&mut page, Msg::Submit(form("Engenharia")));
        assert_eq!(
            effects,
            vec![Effect::Insert {
                session: 1,
                form: form("Engenharia"),
            }]
        );
        assert!(page.creating);

        let effects = reduce(&mut page, created(1));
        assert!(!page.creating);
        assert!(!page.form_open);
        assert!(has_fetch(&effects));
        assert_eq!(
            notification(&effects),
            Some(&Notification::success("Aluno cadastrado com sucesso."))
        );
    }

    #[test]
    fn duplicate_submit_while_pending_is_ignored() {
        let mut page = loaded_page(Vec::new());
        reduce(&mut page, Msg::NewStudent);

        assert_eq!(reduce(&mut page, Msg::Submit(form("Engenharia"))).len(), 1);
        assert!(reduce(&mut page, Msg::Submit(form("Engenharia"))).is_empty());
    }

    #[test]
    fn create_failure_keeps_dialog_open_and_list_unchanged() {
        let existing = vec![student("1", "Bruno", "Direito", "B002")];
        let mut page = loaded_page(existing.clone());
        reduce(&mut page, Msg::NewStudent);
        reduce(&mut page, Msg::Submit(form("Engenharia")));

        let effects = reduce(
            &mut page,
            Msg::Created {
                session: 1,
                result: Err(api_error("duplicate key value violates unique constraint")),
            },
        );

        assert!(page.form_open);
        assert!(!page.creating);
        assert_eq!(page.students, existing);
        assert!(!has_fetch(&effects));
        assert_eq!(
            notification(&effects),
            Some(&Notification::failure(
                "Erro ao cadastrar",
                "duplicate key value violates unique constraint"
            ))
        );
    }

    #[test]
    fn edit_sends_update_with_original_id_then_refetches() {
        let original = student("7", "Ana Souza", "Engenharia", "A001");
        let mut page = loaded_page(vec![original.clone()]);

        reduce(&mut page, Msg::Edit(original));
        assert!(page.form_open);
        assert_eq!(page.selected.as_ref().map(|s| s.form().course), Some("Engenharia".into()));

        let effects = reduce(&mut page, Msg::Submit(form("Medicina")));
        assert_eq!(
            effects,
            vec![Effect::Update {
                session: 1,
                id: "7".into(),
                form: form("Medicina"),
            }]
        );
        assert!(page.updating);

        let effects = reduce(&mut page, updated(1, Ok(())));
        assert!(!page.form_open);
        assert!(page.selected.is_none());
        assert!(has_fetch(&effects));
        assert_eq!(
            notification(&effects),
            Some(&Notification::success("Aluno atualizado com sucesso."))
        );
    }

    #[test]
    fn update_failure_keeps_selection_and_dialog() {
        let original = student("7", "Ana Souza", "Engenharia", "A001");
        let mut page = loaded_page(vec![original.clone()]);
        reduce(&mut page, Msg::Edit(original.clone()));
        reduce(&mut page, Msg::Submit(form("Medicina")));

        let effects = reduce(&mut page, updated(1, Err(StoreError::Network("offline".into()))));

        assert!(page.form_open);
        assert_eq!(page.selected, Some(original));
        assert!(!has_fetch(&effects));
        assert_eq!(notification(&effects).unwrap().title, "Erro ao atualizar");
    }

    #[test]
    fn new_student_after_edit_clears_selection_and_remounts_form() {
        let original = student("7", "Ana Souza", "Engenharia", "A001");
        let mut page = loaded_page(vec![original.clone()]);
        reduce(&mut page, Msg::Edit(original));
        reduce(&mut page, Msg::CloseForm);
        assert!(!page.form_open);

        reduce(&mut page, Msg::NewStudent);
        assert!(page.selected.is_none());
        assert_eq!(page.form_session, 2);
        assert_eq!(
            reduce(&mut page, Msg::Submit(form("Direito"))),
            vec![Effect::Insert {
                session: 2,
                form: form("Direito"),
            }]
        );
    }

    #[test]
    fn delete_failure_keeps_confirmation_open() {
        let mut page = loaded_page(vec![student("42", "Ana", "Engenharia", "A001")]);

        reduce(&mut page, Msg::AskDelete("42".into()));
        assert!(page.delete_open);
        assert_eq!(page.delete_id.as_deref(), Some("42"));

        let effects = reduce(&mut page, Msg::ConfirmDelete);
        assert_eq!(effects, vec![Effect::Delete("42".into())]);
        assert!(page.deleting);
        assert!(reduce(&mut page, Msg::ConfirmDelete).is_empty());

        let effects = reduce(&mut page, deleted("42", Err(api_error("permission denied"))));
        assert!(page.delete_open);
        assert!(!page.deleting);
        assert_eq!(page.delete_id.as_deref(), Some("42"));
        assert_eq!(page.students.len(), 1);
        assert_eq!(
            notification(&effects),
            Some(&Notification::failure("Erro ao excluir", "permission denied"))
        );

        // the user may retry by hand
        assert_eq!(reduce(&mut page, Msg::ConfirmDelete), vec![Effect::Delete("42".into())]);
    }

    #[test]
    fn delete_success_closes_and_refetches() {
        let mut page = loaded_page(vec![student("42", "Ana", "Engenharia", "A001")]);
        reduce(&mut page, Msg::AskDelete("42".into()));
        reduce(&mut page, Msg::ConfirmDelete);

        let effects = reduce(&mut page, deleted("42", Ok(())));
        assert!(!page.delete_open);
        assert!(page.delete_id.is_none());
        assert!(has_fetch(&effects));
        assert_eq!(
            notification(&effects),
            Some(&Notification::success("Aluno excluído com sucesso."))
        );
    }

    #[test]
    fn late_delete_success_leaves_newer_confirmation_open() {
        let mut page = loaded_page(vec![
            student("A", "Ana", "Engenharia", "A001"),
            student("B", "Bruno", "Direito", "B002"),
        ]);
        reduce(&mut page, Msg::AskDelete("A".into()));
        assert_eq!(reduce(&mut page, Msg::ConfirmDelete), vec![Effect::Delete("A".into())]);
        reduce(&mut page, Msg::CloseDelete);
        reduce(&mut page, Msg::AskDelete("B".into()));

        let effects = reduce(&mut page, deleted("A", Ok(())));
        assert!(page.delete_open);
        assert_eq!(page.delete_id.as_deref(), Some("B"));
        assert!(!page.deleting);
        assert!(has_fetch(&effects));

        assert_eq!(reduce(&mut page, Msg::ConfirmDelete), vec![Effect::Delete("B".into())]);
    }

    #[test]
    fn late_update_success_leaves_newer_form_open() {
        let first = student("7", "Ana Souza", "Engenharia", "A001");
        let second = student("8", "Bruno Lima", "Direito", "B002");
        let mut page = loaded_page(vec![first.clone(), second.clone()]);
        reduce(&mut page, Msg::Edit(first));
        reduce(&mut page, Msg::Submit(form("Medicina")));
        reduce(&mut page, Msg::CloseForm);
        reduce(&mut page, Msg::Edit(second.clone()));
        assert_eq!(page.form_session, 2);

        let effects = reduce(&mut page, updated(1, Ok(())));
        assert!(page.form_open);
        assert_eq!(page.selected, Some(second));
        assert!(!page.updating);
        assert!(has_fetch(&effects));
    }

    #[test]
    fn late_create_success_leaves_edit_form_open() {
        let existing = student("7", "Ana Souza", "Engenharia", "A001");
        let mut page = loaded_page(vec![existing.clone()]);
        reduce(&mut page, Msg::NewStudent);
        reduce(&mut page, Msg::Submit(form("Direito")));
        reduce(&mut page, Msg::Edit(existing.clone()));

        reduce(&mut page, created(1));
        assert!(page.form_open);
        assert_eq!(page.selected, Some(existing));
    }

    #[test]
    fn confirm_without_pending_id_does_nothing() {
        let mut page = loaded_page(Vec::new());
        assert!(reduce(&mut page, Msg::ConfirmDelete).is_empty());
        assert!(!page.deleting);
    }
}
