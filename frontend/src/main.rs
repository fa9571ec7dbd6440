use crate::app::App;

mod app;
mod components;
mod designer;

fn main() {
    yew::Renderer::<App>::new().render();
}
