use futures::future::FutureExt;

use super::{
    error::{FetchError, FetchResult},
    markup::{render_outcome, RenderMode},
    spawn::Spawner,
    transport::{Transport, TransportHandle},
    uri::build_uri,
};

/// Issues one GET per call and hands the outcome to a continuation.
///
/// Every call opens its own transport handle, so calls never affect each
/// other. The continuation is `FnOnce` and is called exactly once: right away
/// if the host has no transport, otherwise from a spawned task once the
/// request completes. Nothing is cancelled, retried or timed out.
#[derive(Debug, Clone)]
pub struct Fetcher<T, S> {
    transport: T,
    spawner: S,
}

impl<T, S> Fetcher<T, S>
where
    T: Transport,
    S: Spawner,
{
    pub fn new(transport: T, spawner: S) -> Self {
        Self { transport, spawner }
    }

    pub fn fetch<P, F>(&self, endpoint: &str, params: &[P], continuation: F)
    where
        P: AsRef<str>,
        F: FnOnce(FetchResult<String>) + 'static,
    {
        let Some(handle) = self.transport.open() else {
            log::warn!("no asynchronous transport, skipping GET {}", endpoint);
            continuation(Err(FetchError::TransportUnavailable));
            return;
        };

        let uri = build_uri(endpoint, params);
        log::debug!("GET {}", uri);
        let request = handle.get(uri);

        self.spawner.spawn(
            async move {
                let completion = request.await;
                continuation(completion.into_outcome());
            }
            .boxed_local(),
        );
    }

    /// [`Fetcher::fetch`] with the outcome already rendered to page text.
    pub fn fetch_text<P, F>(&self, endpoint: &str, params: &[P], mode: RenderMode, continuation: F)
    where
        P: AsRef<str>,
        F: FnOnce(String) + 'static,
    {
        self.fetch(endpoint, params, move |outcome| {
            continuation(render_outcome(&outcome, mode))
        });
    }
}
