//! Use cases
//!
//! Server side: [`relay_chat`] and [`relay_contact`] forward visitor input to
//! outside services. Client side: [`chat_widget`] and [`contact_form`] drive
//! the domain state machines against the relays.

pub mod chat_widget;
pub mod contact_form;
pub mod relay_chat;
pub mod relay_contact;
