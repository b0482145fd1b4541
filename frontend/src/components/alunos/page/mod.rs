//! Student records page: the one component that talks to the store.
//!
//! Responsibilities
//! - Own the fetched record list, the search term, the record selected for
//!   editing and the visibility of both dialogs.
//! - On first render, load the store config from the host and fetch the list.
//! - Run create/update/delete requests and refetch after each success.
//! - Compose the search bar, `AlunosTable`, the form dialog and the delete
//!   confirmation.

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::AlunosPage;

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::store::load_config;

impl Component for AlunosPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AlunosPage::new(Callback::from(helpers::browser_offset_at))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = load_config().await;
                if let Ok(config) = &result {
                    log!(format!("Store configured at {} (table {})", config.url, config.table));
                }
                link.send_message(Msg::ConfigLoaded(result));
            });
        }
    }
}
