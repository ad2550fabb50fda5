pub mod fetch;
pub use self::fetch::*;

pub mod markup;
pub use self::markup::*;

pub mod transport;
pub use self::transport::*;

mod spawn;
pub use self::spawn::*;

mod uri;
pub use self::uri::*;

pub mod error;
pub use self::error::*;

/// The fetcher the browser build runs with.
pub type BrowserFetcher = Fetcher<BrowserTransport, BrowserSpawner>;
