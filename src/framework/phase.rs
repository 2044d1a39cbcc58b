//! # Request Lifecycle
//!
//! Every network-backed store operation goes through three observable phases.
//! Clients dispatch them one after another as ordinary actions:
//!
//! ```text
//! Pending ──► Fulfilled(payload)
//!         └─► Rejected(rejection)
//! ```
//!
//! Stores only react to these phases. They never start or await a request
//! themselves.

use std::fmt::Display;

/// One phase of an asynchronous request.
#[derive(Debug, Clone, PartialEq)]
pub enum AsyncPhase<P> {
    Pending,
    Fulfilled(P),
    Rejected(Rejection),
}

impl<P> AsyncPhase<P> {
    /// Converts the fulfilled payload, keeping the other phases as they are.
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> AsyncPhase<Q> {
        match self {
            AsyncPhase::Pending => AsyncPhase::Pending,
            AsyncPhase::Fulfilled(payload) => AsyncPhase::Fulfilled(f(payload)),
            AsyncPhase::Rejected(rejection) => AsyncPhase::Rejected(rejection),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncPhase::Pending)
    }
}

/// Why a request was rejected.
///
/// `payload` is an explicit value chosen by the caller (a user-facing
/// message), `message` is whatever the underlying error said. Either may be
/// missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rejection {
    pub payload: Option<String>,
    pub message: Option<String>,
}

impl Rejection {
    /// A rejection with no information at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A rejection carrying an error message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            payload: None,
            message: Some(message.into()),
        }
    }

    /// A rejection carrying an explicit payload: a value the caller chose to
    /// show, as opposed to whatever the error happened to say.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
            message: None,
        }
    }

    /// Builds a rejection from any error, using its `Display` text.
    pub fn from_error(error: &impl Display) -> Self {
        Self::with_message(error.to_string())
    }

    /// The text a store records: payload first, then message, then `default`.
    pub fn reason_or(&self, default: &str) -> String {
        self.payload
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or(default)
            .to_string()
    }
}
