//! Interactive chat module
//!
//! Provides a readline-based chat client that behaves like the site's
//! chat widget.

mod repl;

pub use repl::ChatRepl;
