pub mod app;
pub mod dashboards;
pub mod shared;

use app::App;
use leptos::prelude::*;
use shared::config::DashboardConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let (config, warnings) = DashboardConfig::from_build_env();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    for warning in &warnings {
        log::warn!("config: {}", warning);
    }
    log::info!("sales API base: {}", shared::api_utils::api_base(&config));

    leptos::mount::mount_to_body(move || {
        let config = config.clone();
        view! { <App config=config /> }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
