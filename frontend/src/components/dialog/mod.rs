//! Modal dialog shell used by the record form and the delete confirmation.
//!
//! Visibility is driven entirely by the `open` prop; the dialog renders
//! nothing while closed, so its children are mounted fresh on every opening.

mod delete_confirm;

pub use delete_confirm::DeleteConfirmDialog;

use uuid::Uuid;
use yew::prelude::*;

pub struct Modal {
    /// Unique id tying the dialog to its title for assistive technology.
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    #[prop_or_default]
    pub description: Option<String>,
    /// Fired by the close button.
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = ModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("dialog-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let title_id = format!("{}-title", self.id);
        let on_close = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.6);z-index:9999;display:flex;align-items:center;justify-content:center;">
                <div
                    id={self.id.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    style="position:relative;width:100%;max-width:500px;background:#fff;border-radius:8px;padding:1.5rem;box-shadow:0 10px 30px rgba(0,0,0,0.25);"
                >
                    <button
                        onclick={on_close}
                        aria-label="Fechar"
                        style="position:absolute;top:12px;right:12px;background:transparent;border:none;font-size:1.25rem;cursor:pointer;"
                    >
                        { "✕" }
                    </button>
                    <h2 id={title_id} style="margin:0 0 0.25rem 0;font-size:1.25rem;">{ props.title.clone() }</h2>
                    {
                        if let Some(description) = &props.description {
                            html! { <p style="margin:0 0 1rem 0;color:#64748b;">{ description.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
