use futures::future::{FutureExt, LocalBoxFuture};
use gloo::net::http::Request;
use wasm_bindgen::JsValue;

use super::error::{FetchError, FetchResult};

/// Final state of one GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub status: u16,
    pub body: String,
}

impl Completion {
    pub const OK: u16 = 200;

    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A request that never got an HTTP response.
    pub fn network_failure() -> Self {
        Self::new(0, String::new())
    }

    pub fn into_outcome(self) -> FetchResult<String> {
        if self.status == Self::OK {
            Ok(self.body)
        } else {
            Err(FetchError::RequestFailed {
                status: self.status,
            })
        }
    }
}

/// Host capability for issuing asynchronous GETs.
pub trait Transport {
    type Handle: TransportHandle;

    /// A fresh handle for a single request, or `None` when the host has no
    /// asynchronous request support at all.
    fn open(&self) -> Option<Self::Handle>;
}

pub trait TransportHandle {
    /// Resolves once, when the request reaches its final state.
    fn get(self, uri: String) -> LocalBoxFuture<'static, Completion>;
}

/// Fetch API transport.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    type Handle = BrowserRequest;

    fn open(&self) -> Option<BrowserRequest> {
        let window = web_sys::window()?;
        match js_sys::Reflect::get(&window, &JsValue::from_str("fetch")) {
            Ok(fetch) if fetch.is_function() => Some(BrowserRequest),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct BrowserRequest;

impl TransportHandle for BrowserRequest {
    fn get(self, uri: String) -> LocalBoxFuture<'static, Completion> {
        async move {
            match request_completion(&uri).await {
                Ok(completion) => completion,
                Err(err) => {
                    log::warn!("GET {} failed before a response: {}", uri, err);
                    Completion::network_failure()
                }
            }
        }
        .boxed_local()
    }
}

async fn request_completion(path: &str) -> Result<Completion, gloo::net::Error> {
    let response = Request::get(path).send().await?;
    let status = response.status();
    Ok(settle(path, status, response.text().await))
}

/// Pairs the status with the body. A body that cannot be read keeps a
/// non-200 status; on a 200 it counts as a failed request.
fn settle<E: std::fmt::Display>(path: &str, status: u16, body: Result<String, E>) -> Completion {
    match body {
        Ok(body) => Completion::new(status, body),
        Err(err) if status != Completion::OK => {
            log::debug!("GET {} returned {}, body unreadable: {}", path, status, err);
            Completion::new(status, String::new())
        }
        Err(err) => {
            log::warn!("GET {} returned 200 but the body was unreadable: {}", path, err);
            Completion::network_failure()
        }
    }
}
