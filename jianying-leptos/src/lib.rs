pub mod app;
pub mod logger;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    logger::init();
    tracing::debug!("mounting page");
    leptos::mount_to_body(app::App);
}
