//! Domain layer for portfolio-relay
//!
//! This crate contains the core entities, value objects and state machines.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Chat widget
//!
//! A [`ChatSession`] owns an append-only [`Transcript`] and a [`ChatState`]
//! (`Closed`, `OpenIdle`, `OpenWaiting`). Accepting a submission hands out a
//! [`PendingReply`] token; the reply can only be applied by giving it back.
//!
//! ## Contact form
//!
//! A [`ContactForm`] holds the editable fields and validates them into a
//! [`ContactSubmission`], which the relay turns into an [`OutgoingEmail`].
//!
//! ## Showcase
//!
//! The fixed profile, project and skill data rendered by the portfolio page.

pub mod chat;
pub mod config;
pub mod contact;
pub mod core;
pub mod showcase;

// Re-export commonly used types
pub use chat::{
    entities::{ChatMessage, Role, Transcript},
    session::{ChatSession, ChatState, FALLBACK_REPLY, PendingReply},
};
pub use config::{ConfigIssue, ConfigIssueCode, Environment, Severity};
pub use contact::{
    email::{Mailbox, OutgoingEmail},
    form::{ContactForm, FormState},
    notification::{Notification, NotificationLevel},
    submission::{ContactField, ContactSubmission},
};
pub use core::error::DomainError;
pub use showcase::{
    catalog::Showcase,
    entities::{Profile, ProfileLink, Project, Skill, SkillCategory},
};
