//! Chat backend adapters
//!
//! - [`HttpChatBackend`] forwards to the external chat service
//! - [`CannedChatBackend`] answers locally from a keyword table

mod canned;
mod http;

pub use canned::CannedChatBackend;
pub use http::HttpChatBackend;
