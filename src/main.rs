mod analytics;
mod app;
mod components;
mod controller;
mod spotify;
mod stage;
mod wrapped;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
