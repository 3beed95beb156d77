//! Transport boundary to the goo labs API

mod capability;
mod http;
mod transport;

pub use capability::Capability;
pub use http::HttpTransport;
pub use transport::{Transport, TransportError};
