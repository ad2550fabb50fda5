use thiserror::Error;

use super::markup::error_wrap;

pub type FetchResult<T> = Result<T, FetchError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Unable to asynchronously load.")]
    TransportUnavailable,
    /// Status 0 means the request never got an HTTP response.
    #[error("Error: {status}")]
    RequestFailed { status: u16 },
}

impl FetchError {
    /// The error as page markup, e.g. `<span class="error">Error: 500</span>`.
    pub fn to_markup(&self) -> String {
        error_wrap(&self.to_string())
    }
}
