use frontend::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Mounting {} landing page", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
