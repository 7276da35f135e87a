//! Chat widget domain.
//!
//! - [`entities::ChatMessage`]: a single transcript entry
//! - [`entities::Transcript`]: the append-only message history
//! - [`session::ChatSession`]: the widget state machine

pub mod entities;
pub mod session;
