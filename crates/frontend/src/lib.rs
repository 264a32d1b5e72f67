pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use crate::shared::config::load_config;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    // конфигурация нужна до первого запроса к API
    spawn_local(async {
        let config = load_config().await;
        leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
