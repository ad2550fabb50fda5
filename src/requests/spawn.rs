use futures::future::LocalBoxFuture;

/// Schedules work on the page's single event thread.
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSpawner;

impl Spawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
