//! Student form: four labelled fields and a submit button.
//!
//! The form owns no network access. It validates on submit and hands the
//! trimmed values to `on_submit`; invalid fields get an inline message and
//! nothing is emitted.

mod messages;
mod props;
mod state;
mod view;

pub use messages::Msg;
pub use props::AlunoFormProps;
pub use state::AlunoForm;

use yew::prelude::*;

impl Component for AlunoForm {
    type Message = Msg;
    type Properties = AlunoFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        AlunoForm::new(ctx.props().initial.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(field, value) => {
                self.input(field, value);
                true
            }
            Msg::Submit => {
                if ctx.props().loading {
                    return false;
                }
                if let Some(clean) = self.submit() {
                    ctx.props().on_submit.emit(clean);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
