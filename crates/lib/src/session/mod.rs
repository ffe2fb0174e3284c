//! Chat session message log.
//!
//! A [`ChatSession`] is the append-only history of one chat window. Messages
//! are never edited or removed, and the log is dropped with the session.
//! The session does not talk to the dispatcher itself: the owner appends the
//! user's message, produces a reply however it likes (typically after a
//! simulated typing delay), and appends that reply.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::constants::WELCOME;

pub mod errors;

pub use errors::SessionError;

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    User,
    Assistant,
}

/// A single immutable chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    sequence_id: u64,
    text: String,
    origin: Origin,
    created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Position in the session, starting at 1 and strictly increasing.
    pub fn sequence_id(&self) -> u64 {
        self.sequence_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_assistant(&self) -> bool {
        self.origin == Origin::Assistant
    }
}

/// Append-only message log of one chat window.
#[derive(Debug)]
pub struct ChatSession {
    clock: Arc<dyn Clock>,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    /// Start a session holding the assistant's welcome message.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let mut session = Self {
            clock,
            messages: Vec::new(),
            next_id: 1,
        };
        session.append(WELCOME.to_string(), Origin::Assistant);
        session
    }

    /// Append a user message, rejecting blank text.
    ///
    /// The text is stored exactly as typed.
    pub fn push_user(&mut self, text: impl Into<String>) -> Result<&ChatMessage, SessionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        Ok(self.append(text, Origin::User))
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.append(text.into(), Origin::Assistant)
    }

    fn append(&mut self, text: String, origin: Origin) -> &ChatMessage {
        let message = ChatMessage {
            sequence_id: self.next_id,
            text,
            origin,
            created_at: self.clock.now_utc(),
        };
        self.next_id += 1;
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false: a session starts with the welcome message.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
