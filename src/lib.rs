//! Browser helpers for the latency test pages: one asynchronous GET per
//! action, with the outcome rendered into a page container.

pub mod logger;
pub mod page;
pub mod requests;

#[cfg(test)]
mod testing;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
