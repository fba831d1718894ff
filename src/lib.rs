pub mod canvas;
pub mod components;
pub mod config;
pub mod input;
pub mod state;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("logiview {} starting", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(components::app::App);
}
