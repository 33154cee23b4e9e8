//! Menu Cards Web App (Leptos + WASM)

mod app;
mod components;
mod controllers;
mod dom;
mod environment;
mod loader;
mod page;
mod render;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    app::start_when_ready();
}
