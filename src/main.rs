use latency_page::page;
use wasm_bindgen::prelude::*;

// Names the harness pages call from inline `onload`/`onclick` handlers.

#[wasm_bindgen]
pub fn loadtestsel() {
    page::with_bindings(|bindings| bindings.load_test_selector());
}

#[wasm_bindgen]
pub fn runtests() -> bool {
    page::with_bindings(|bindings| bindings.run_selected_test());
    false
}

#[wasm_bindgen]
pub fn clicked() -> bool {
    page::with_bindings(|bindings| bindings.fetch_delayed());
    false
}

fn main() {
    page::start();
}
