use crate::app::App;

mod app;
mod components;
mod github;

fn main() {
    yew::Renderer::<App>::new().render();
}
