use crate::app::App;

mod app;
mod components;
mod notifications;
mod store;

fn main() {
    yew::Renderer::<App>::new().render();
}
