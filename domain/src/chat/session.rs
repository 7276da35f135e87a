//! Chat widget state machine
//!
//! ```text
//!            open()                begin_submit()
//!  Closed ─────────▶ OpenIdle ─────────────────▶ OpenWaiting
//!    ▲                 │  ▲                           │
//!    └──── close() ────┘  └──────── finish() ─────────┘
//! ```
//!
//! Accepting a submission returns a [`PendingReply`]. It cannot be cloned or
//! constructed outside this module, so a reply can only be applied to a
//! session that actually has a request in flight.

use super::entities::{ChatMessage, Transcript};
use serde::{Deserialize, Serialize};

/// Assistant message shown when the relay call fails for any reason.
pub const FALLBACK_REPLY: &str =
    "Sorry, I couldn't reach the assistant right now. Please try again in a moment.";

/// Widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatState {
    #[default]
    Closed,
    OpenIdle,
    OpenWaiting,
}

impl ChatState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ChatState::Closed)
    }

    pub fn is_waiting(&self) -> bool {
        matches!(self, ChatState::OpenWaiting)
    }
}

/// Proof that a submission was accepted and is awaiting its reply.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending reply must be passed back to ChatSession::finish"]
pub struct PendingReply {
    message: String,
}

impl PendingReply {
    /// The text that should be sent to the chat relay
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One chat widget instance (Entity)
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    transcript: Transcript,
    state: ChatState,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an assistant greeting already in the transcript
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let mut session = Self::new();
        if !greeting.trim().is_empty() {
            session.transcript.push(ChatMessage::assistant(greeting));
        }
        session
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Input is enabled only while the widget is open and idle
    pub fn can_submit(&self) -> bool {
        self.state == ChatState::OpenIdle
    }

    pub fn open(&mut self) {
        if self.state == ChatState::Closed {
            self.state = ChatState::OpenIdle;
        }
    }

    /// Close the widget. Ignored while a reply is outstanding.
    pub fn close(&mut self) {
        if self.state == ChatState::OpenIdle {
            self.state = ChatState::Closed;
        }
    }

    /// Accept a submission.
    ///
    /// Returns `None` (and changes nothing) unless the widget is `OpenIdle`
    /// and the trimmed input is non-empty. On acceptance the trimmed text is
    /// appended as a user message before any network call is made.
    pub fn begin_submit(&mut self, input: &str) -> Option<PendingReply> {
        if !self.can_submit() {
            return None;
        }
        let text = input.trim();
        if text.is_empty() {
            return None;
        }

        self.transcript.push(ChatMessage::user(text));
        self.state = ChatState::OpenWaiting;
        Some(PendingReply {
            message: text.to_string(),
        })
    }

    /// Apply the relay outcome for a pending submission.
    ///
    /// Success appends the reply text; any failure appends [`FALLBACK_REPLY`].
    /// Input is re-enabled either way.
    pub fn finish<E>(&mut self, _pending: PendingReply, outcome: Result<String, E>) {
        let content = match outcome {
            Ok(reply) => reply,
            Err(_) => FALLBACK_REPLY.to_string(),
        };
        self.transcript.push(ChatMessage::assistant(content));
        self.state = ChatState::OpenIdle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::entities::Role;

    fn open_session() -> ChatSession {
        let mut session = ChatSession::new();
        session.open();
        session
    }

    #[test]
    fn test_open_and_close() {
        let mut session = ChatSession::new();
        assert_eq!(session.state(), ChatState::Closed);

        session.open();
        assert_eq!(session.state(), ChatState::OpenIdle);

        session.close();
        assert_eq!(session.state(), ChatState::Closed);
    }

    #[test]
    fn test_submit_while_closed_is_noop() {
        let mut session = ChatSession::new();
        assert!(session.begin_submit("hello").is_none());
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut session = open_session();
        assert!(session.begin_submit("").is_none());
        assert!(session.begin_submit("   \n").is_none());
        assert!(session.transcript().is_empty());
        assert_eq!(session.state(), ChatState::OpenIdle);
    }

    #[test]
    fn test_submit_appends_user_message_immediately() {
        let mut session = open_session();
        let pending = session.begin_submit("  what do you build?  ").unwrap();

        assert_eq!(pending.message(), "what do you build?");
        assert_eq!(session.state(), ChatState::OpenWaiting);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(
            session.transcript().last(),
            Some(&ChatMessage::user("what do you build?"))
        );

        session.finish::<()>(pending, Ok("Rust things".to_string()));
    }

    #[test]
    fn test_submit_while_waiting_does_not_grow_transcript() {
        let mut session = open_session();
        let pending = session.begin_submit("first").unwrap();
        let len = session.transcript().len();

        assert!(session.begin_submit("second").is_none());
        assert_eq!(session.transcript().len(), len);

        session.finish::<()>(pending, Ok("ok".to_string()));
    }

    #[test]
    fn test_close_ignored_while_waiting() {
        let mut session = open_session();
        let pending = session.begin_submit("hi").unwrap();

        session.close();
        assert_eq!(session.state(), ChatState::OpenWaiting);

        session.finish::<()>(pending, Ok("hello".to_string()));
        session.close();
        assert_eq!(session.state(), ChatState::Closed);
    }

    #[test]
    fn test_success_appends_reply_in_order() {
        let mut session = open_session();
        let pending = session.begin_submit("hi").unwrap();
        session.finish::<()>(pending, Ok("hello".to_string()));

        let roles: Vec<Role> = session.transcript().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
        assert_eq!(session.transcript().last().unwrap().content, "hello");
        assert_eq!(session.state(), ChatState::OpenIdle);
    }

    #[test]
    fn test_failure_appends_fallback() {
        let mut session = open_session();
        let pending = session.begin_submit("hi").unwrap();
        session.finish(pending, Err("connection refused"));

        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript().last().unwrap().content, FALLBACK_REPLY);
        assert!(session.can_submit());
    }

    #[test]
    fn test_greeting_is_first_message() {
        let session = ChatSession::with_greeting("Hi, ask me anything");
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript().messages()[0].role, Role::Assistant);

        let empty = ChatSession::with_greeting("  ");
        assert!(empty.transcript().is_empty());
    }
}
