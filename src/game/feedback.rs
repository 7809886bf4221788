use std::time::Duration;
use std::time::Instant;

/// How a message should be presented.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

/// A transient message for the player.
///
/// `ttl` is a hint: renderers that can clear the screen should hide the
/// message once it has been visible that long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub tone: Tone,
    pub ttl: Duration,
}

impl Feedback {
    pub fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
            ttl: crate::FEEDBACK_TIMEOUT,
        }
    }
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Tone::Info)
    }
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Tone::Success)
    }
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Tone::Error)
    }
    pub fn expired(&self, shown: Instant) -> bool {
        shown.elapsed() >= self.ttl
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
