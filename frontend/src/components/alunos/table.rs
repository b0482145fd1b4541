//! Table of student records with per-row edit and delete buttons.
//!
//! Purely presentational: it renders what it is given, shows a pulsing
//! placeholder while loading and an explanatory message when empty.

use common::format::{format_created_at, DateTime, FixedOffset, Utc};
use common::model::student::Student;
use yew::prelude::*;

use crate::components::styles::{CARD, GHOST_BUTTON, MUTED_TEXT};

pub const EMPTY_MESSAGE: &str =
    "Nenhum aluno cadastrado ainda. Clique em \"Novo Aluno\" para começar.";

const HEADERS: [&str; 5] = ["Matrícula", "Nome", "Email", "Curso", "Data de Cadastro"];

pub struct AlunosTable;

#[derive(Properties, PartialEq)]
pub struct AlunosTableProps {
    pub students: Vec<Student>,
    pub on_edit: Callback<Student>,
    /// Receives the id of the row to delete.
    pub on_delete: Callback<String>,
    #[prop_or_default]
    pub loading: bool,
    /// Viewer's UTC offset at a given instant, for the creation date column.
    pub offset_at: Callback<DateTime<Utc>, FixedOffset>,
}

impl Component for AlunosTable {
    type Message = ();
    type Properties = AlunosTableProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AlunosTable
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        if props.loading {
            return html! {
                <div style={CARD}>
                    <div style="padding:2rem;display:flex;flex-direction:column;align-items:center;gap:0.75rem;">
                        <div class="pulse" style="height:1rem;width:75%;background:#e2e8f0;border-radius:4px;animation:pulse 1.5s ease-in-out infinite;"></div>
                        <div class="pulse" style="height:1rem;width:50%;background:#e2e8f0;border-radius:4px;animation:pulse 1.5s ease-in-out infinite;"></div>
                        <div class="pulse" style="height:1rem;width:66%;background:#e2e8f0;border-radius:4px;animation:pulse 1.5s ease-in-out infinite;"></div>
                        <style>{r#"
                            @keyframes pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.4; } }
                        "#}</style>
                    </div>
                </div>
            };
        }

        if props.students.is_empty() {
            return html! {
                <div style={CARD}>
                    <div style="padding:2rem;text-align:center;">
                        <p style={MUTED_TEXT}>{ EMPTY_MESSAGE }</p>
                    </div>
                </div>
            };
        }

        html! {
            <div style={CARD}>
                <table style="width:100%;border-collapse:collapse;font-size:0.95rem;">
                    <thead>
                        <tr style="text-align:left;border-bottom:1px solid #e2e8f0;">
                            { for HEADERS.iter().map(|h| html! { <th style="padding:0.75rem;">{ *h }</th> }) }
                            <th style="padding:0.75rem;text-align:right;">{ "Ações" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for props.students.iter().map(|student| row(student, props)) }
                    </tbody>
                </table>
            </div>
        }
    }
}

fn row(student: &Student, props: &AlunosTableProps) -> Html {
    let on_edit: Callback<MouseEvent> = emit_value(&props.on_edit, student.clone());
    let on_delete: Callback<MouseEvent> = emit_value(&props.on_delete, student.id.clone());
    let created_at = format_created_at(
        &student.created_at,
        props.offset_at.emit(student.created_at),
    );

    html! {
        <tr key={student.id.clone()} style="border-bottom:1px solid #f1f5f9;">
            <td style="padding:0.75rem;font-weight:600;">{ student.enrollment_id.clone() }</td>
            <td style="padding:0.75rem;">{ student.name.clone() }</td>
            <td style="padding:0.75rem;">{ student.email.clone() }</td>
            <td style="padding:0.75rem;">{ student.course.clone() }</td>
            <td style="padding:0.75rem;">{ created_at }</td>
            <td style="padding:0.75rem;text-align:right;white-space:nowrap;">
                <button style={GHOST_BUTTON} title="Editar" aria-label="Editar" onclick={on_edit}>
                    <i class="material-icons">{"edit"}</i>
                </button>
                <button style={GHOST_BUTTON} title="Excluir" aria-label="Excluir" onclick={on_delete}>
                    <i class="material-icons" style="color:#d32f2f;">{"delete"}</i>
                </button>
            </td>
        </tr>
    }
}

/// A callback that ignores its event and hands `value` to `target`.
fn emit_value<E: 'static, T: Clone + 'static>(target: &Callback<T>, value: T) -> Callback<E> {
    target.reform(move |_: E| value.clone())
}
