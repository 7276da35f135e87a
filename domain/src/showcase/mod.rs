//! Showcase domain: the fixed content of the portfolio page.
//!
//! - [`entities`]: profile, project and skill value objects
//! - [`catalog::Showcase`]: the built-in page content

pub mod catalog;
pub mod entities;
