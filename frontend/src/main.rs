use arcano_frontend::{config, App};

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("{} initialised", config::SITE_NAME);
    yew::Renderer::<App>::new().render();
}
