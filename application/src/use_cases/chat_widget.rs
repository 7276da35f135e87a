//! Chat widget controller
//!
//! Drives a [`ChatSession`] against the chat relay. The controller is owned by
//! one client task and every mutating call takes `&mut self`, so only one
//! request can be in flight; the session state machine enforces the rest.

use crate::ports::relay_client::ChatEndpoint;
use portfolio_domain::{ChatMessage, ChatSession, ChatState, Transcript};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct ChatWidgetController {
    endpoint: Arc<dyn ChatEndpoint>,
    session: ChatSession,
}

impl ChatWidgetController {
    pub fn new(endpoint: Arc<dyn ChatEndpoint>) -> Self {
        Self {
            endpoint,
            session: ChatSession::new(),
        }
    }

    /// Start the transcript with an assistant greeting
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.session = ChatSession::with_greeting(greeting);
        self
    }

    pub fn state(&self) -> ChatState {
        self.session.state()
    }

    pub fn transcript(&self) -> &Transcript {
        self.session.transcript()
    }

    pub fn open(&mut self) {
        self.session.open();
    }

    pub fn close(&mut self) {
        self.session.close();
    }

    /// Submit a chat message and wait for the reply.
    ///
    /// Returns the assistant message that was appended, or `None` when the
    /// submission was ignored (widget not idle, or blank input).
    pub async fn submit(&mut self, input: &str) -> Option<&ChatMessage> {
        let pending = self.session.begin_submit(input)?;
        debug!("Sending chat message ({} chars)", pending.message().len());

        let outcome = self.endpoint.send_message(pending.message()).await;
        if let Err(e) = &outcome {
            warn!("Chat request failed, showing fallback reply: {}", e);
        }

        self.session.finish(pending, outcome);
        self.session.transcript().last()
    }
}
