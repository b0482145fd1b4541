use yew::prelude::*;

use super::Modal;
use crate::components::styles::{DANGER_BUTTON, OUTLINE_BUTTON};

/// Confirmation prompt shown before deleting a record.
///
/// While `loading` is true both buttons are disabled, so a pending delete
/// cannot be confirmed twice.
pub struct DeleteConfirmDialog;

#[derive(Properties, PartialEq)]
pub struct DeleteConfirmProps {
    pub open: bool,
    #[prop_or_default]
    pub loading: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

impl Component for DeleteConfirmDialog {
    type Message = ();
    type Properties = DeleteConfirmProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DeleteConfirmDialog
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_confirm = props.on_confirm.reform(|_: MouseEvent| ());
        let on_cancel = props.on_cancel.reform(|_: MouseEvent| ());

        html! {
            <Modal
                open={props.open}
                title={"Confirmar exclusão".to_string()}
                description={Some("Tem certeza que deseja excluir este aluno? Esta ação não pode ser desfeita.".to_string())}
                on_close={props.on_cancel.clone()}
            >
                <div style="display:flex;justify-content:flex-end;gap:0.5rem;">
                    <button style={OUTLINE_BUTTON} onclick={on_cancel} disabled={props.loading}>
                        { "Cancelar" }
                    </button>
                    <button style={DANGER_BUTTON} onclick={on_confirm} disabled={props.loading}>
                        { if props.loading { "Excluindo..." } else { "Excluir" } }
                    </button>
                </div>
            </Modal>
        }
    }
}
