use diagher::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting diagher landing page");
    yew::Renderer::<App>::new().render();
}
