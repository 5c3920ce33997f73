mod components;
mod config;
mod export;
mod gate;
mod icons;
mod models;
mod reducer;
mod utils;

use components::App;
use config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 {} iniciando...", CONFIG.brand_name);

    yew::Renderer::<App>::new().render();
}
