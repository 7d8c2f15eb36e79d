#![recursion_limit = "1024"]
#![allow(clippy::needless_return)]

mod app;
mod auth;
mod config;
mod console;
mod guard;
mod location;
mod pages;
mod utils;

use wasm_bindgen::prelude::*;

pub fn main() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(config::LOG_LEVEL));
    yew::Renderer::<app::Application>::new().render();
    Ok(())
}
