use yew::prelude::*;

use crate::components::alunos::form::AlunoForm;
use crate::components::alunos::table::AlunosTable;
use crate::components::dialog::{DeleteConfirmDialog, Modal};
use crate::components::styles::{INPUT, MUTED_TEXT, PRIMARY_BUTTON};

use super::messages::Msg;
use super::state::AlunosPage;

pub fn view(page: &AlunosPage, ctx: &Context<AlunosPage>) -> Html {
    let link = ctx.link();

    let on_search = link.callback(|e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });

    let (title, description) = if page.selected.is_some() {
        ("Editar Aluno", "Atualize as informações do aluno abaixo.")
    } else {
        ("Cadastrar Novo Aluno", "Preencha os dados do novo aluno abaixo.")
    };

    html! {
        <div style="min-height:100vh;background:linear-gradient(135deg,#f8fafc,#e2e8f0);font-family:Arial, sans-serif;">
            <div style="max-width:1100px;margin:0 auto;padding:2rem 1rem;">
                <div style="display:flex;align-items:center;gap:0.75rem;margin-bottom:2rem;">
                    <div style="padding:0.5rem;border-radius:8px;background:rgba(25,118,210,0.1);">
                        <i class="material-icons" style="font-size:2rem;color:#1976d2;">{"school"}</i>
                    </div>
                    <div>
                        <h1 style="margin:0;font-size:2.25rem;">{ "Sistema de Controle de Alunos" }</h1>
                        <p style={format!("{}margin:0.25rem 0 0 0;", MUTED_TEXT)}>
                            { "Gerencie cadastros de alunos de forma rápida e eficiente" }
                        </p>
                    </div>
                </div>

                <div style="display:flex;flex-wrap:wrap;gap:1rem;margin-bottom:1.5rem;">
                    <div style="flex:1;min-width:240px;">
                        <input
                            type="text"
                            placeholder="Buscar por nome, email, curso ou matrícula..."
                            value={page.search_term.clone()}
                            oninput={on_search}
                            style={INPUT}
                        />
                    </div>
                    <button style={PRIMARY_BUTTON} onclick={link.callback(|_| Msg::NewStudent)}>
                        { "+ Novo Aluno" }
                    </button>
                </div>

                {
                    if let Some(message) = &page.load_error {
                        html! {
                            <div role="alert" style="margin-bottom:1rem;padding:0.75rem 1rem;border-radius:6px;background:#fdecea;color:#b71c1c;">
                                { format!("Erro ao carregar alunos: {}", message) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <AlunosTable
                    students={page.visible()}
                    on_edit={link.callback(Msg::Edit)}
                    on_delete={link.callback(Msg::AskDelete)}
                    loading={page.loading}
                    offset_at={page.offset_at.clone()}
                />

                <div style={format!("{}margin-top:1.5rem;font-size:0.9rem;", MUTED_TEXT)}>
                    { page.stats_line() }
                </div>
            </div>

            <Modal
                open={page.form_open}
                title={title.to_string()}
                description={Some(description.to_string())}
                on_close={link.callback(|_| Msg::CloseForm)}
            >
                <AlunoForm
                    key={page.form_session}
                    initial={page.selected.as_ref().map(|s| s.form())}
                    on_submit={link.callback(Msg::Submit)}
                    loading={page.saving()}
                />
            </Modal>

            <DeleteConfirmDialog
                open={page.delete_open}
                loading={page.deleting}
                on_confirm={link.callback(|_| Msg::ConfirmDelete)}
                on_cancel={link.callback(|_| Msg::CloseDelete)}
            />
        </div>
    }
}
