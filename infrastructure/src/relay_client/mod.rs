//! Client adapter for the relay endpoints

mod http;

pub use http::HttpRelayClient;
