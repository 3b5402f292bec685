#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("console logger unavailable: {err}");
    }

    log::info!("mapnote starting");
    leptos::mount::mount_to_body(client::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("mapnote runs in the browser: build for wasm32 with the `csr` feature (trunk serve --features csr)");
}
