//! Stock Manager Web App (Leptos + WASM)

mod app;
mod components;
mod logging;
pub mod storage;

use wasm_bindgen::prelude::*;

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(app::App);
}
