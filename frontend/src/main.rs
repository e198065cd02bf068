use crate::app::App;

mod app;
mod components;
mod config;
mod console_logger;
mod context;
mod identity;
mod pages;
mod route;
mod storage;

fn main() {
    console_logger::init();
    yew::Renderer::<App>::new().render();
}
