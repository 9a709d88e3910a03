pub mod app;
pub mod components;
pub mod error;
pub mod models;
#[cfg(feature = "ssr")]
pub mod server;
pub mod utils;
pub mod validation;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
