//! Contact form domain.
//!
//! - [`submission::ContactSubmission`]: validated form payload sent to the relay
//! - [`form::ContactForm`]: editable fields plus the editing/submitting state
//! - [`email::OutgoingEmail`]: the message the relay hands to the mail transport
//! - [`notification::Notification`]: user-facing outcome of a submission

pub mod email;
pub mod form;
pub mod notification;
pub mod submission;
