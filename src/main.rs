use feed_lists::App;

fn main() {
    feed_lists::init_diagnostics();
    log::info!("🚀 Feed lists starting...");

    yew::Renderer::<App>::new().render();
}
