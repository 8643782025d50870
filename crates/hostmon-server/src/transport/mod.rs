//! Transport layer

pub mod http;

pub use http::{Cors, HttpTransport, HttpTransportConfig};
