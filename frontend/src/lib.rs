mod components;
pub mod config;
mod pages;
pub mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

pub use pages::dashboard::{repository, table};

#[cfg(target_arch = "wasm32")]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger was already initialised".into());
    }
    log::info!("Starting insights dashboard");

    // The dashboard reads the config once, so mount only after it resolves.
    wasm_bindgen_futures::spawn_local(async move {
        let config = config::init().await;
        log::info!(
            "Runtime config ready: {} records, page size {}, refresh every {}ms",
            config.record_count,
            config.page_size,
            config.refresh_interval_ms
        );
        router::mount_app();
    });
}
