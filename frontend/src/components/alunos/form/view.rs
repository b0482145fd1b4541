use common::validation::Field;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::styles::{ERROR_TEXT, INPUT, INPUT_INVALID, PRIMARY_BUTTON};

use super::messages::Msg;
use super::state::AlunoForm;

/// Label, placeholder and input type of each field, in display order.
const FIELDS: [(Field, &str, &str, &str); 4] = [
    (Field::Name, "Nome Completo", "Digite o nome completo", "text"),
    (Field::Email, "Email", "exemplo@email.com", "email"),
    (Field::Course, "Curso", "Digite o curso", "text"),
    (Field::EnrollmentId, "Matrícula", "Digite a matrícula", "text"),
];

pub fn view(component: &AlunoForm, ctx: &Context<AlunoForm>) -> Html {
    let link = ctx.link();
    let loading = ctx.props().loading;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form {onsubmit} novalidate={true} style="display:flex;flex-direction:column;gap:1rem;">
            { for FIELDS.iter().map(|(field, label, placeholder, kind)| {
                field_view(component, link, *field, label, placeholder, kind, loading)
            }) }
            <button type="submit" style={PRIMARY_BUTTON} disabled={loading}>
                { if loading { "Salvando..." } else { "Salvar Aluno" } }
            </button>
        </form>
    }
}

fn field_view(
    component: &AlunoForm,
    link: &Scope<AlunoForm>,
    field: Field,
    label: &str,
    placeholder: &str,
    kind: &str,
    disabled: bool,
) -> Html {
    let id = format!("aluno-{:?}", field).to_lowercase();
    let error = component.errors.get(field);
    let oninput = link.callback(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::Input(field, input.value())
    });

    html! {
        <div style="display:flex;flex-direction:column;gap:0.35rem;">
            <label for={id.clone()} style="font-weight:600;font-size:0.9rem;">{ label.to_string() }</label>
            <input
                id={id}
                type={kind.to_string()}
                placeholder={placeholder.to_string()}
                value={field.value(&component.values).to_string()}
                style={if error.is_some() { INPUT_INVALID } else { INPUT }}
                aria-invalid={error.is_some().to_string()}
                {oninput}
                {disabled}
            />
            {
                if let Some(message) = error {
                    html! { <p style={ERROR_TEXT}>{ message }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
