fn main() {
    #[cfg(target_arch = "wasm32")]
    insights_frontend::start();
}
