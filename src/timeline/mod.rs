use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message author role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single chat entry. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(default = "chrono::Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// Append-only ordered log of chat messages for one panel.
///
/// Insertion order is display order. Entries are never edited or
/// removed for the life of the widget. `pending` tracks the typing
/// indicator: true while a simulated response is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    messages: Vec<Message>,
    #[serde(default)]
    pending: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            pending: false,
        }
    }

    /// Timeline pre-populated with a single assistant greeting.
    pub fn seeded(welcome: &str) -> Self {
        let mut timeline = Self::new();
        timeline.append(Sender::Assistant, welcome);
        timeline
    }

    /// Append a message with the surrounding whitespace trimmed.
    ///
    /// Input that is empty after trimming creates nothing and returns
    /// `None`; callers treat that as a silent no-op rather than an
    /// error.
    pub fn append(&mut self, sender: Sender, text: &str) -> Option<&Message> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(Message {
            sender,
            text: trimmed.to_string(),
            timestamp: Utc::now(),
        });
        self.messages.last()
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Transcript as a JSON array of `{sender, text, timestamp}`
    /// records, oldest first.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.messages).unwrap_or_else(|_| serde_json::Value::Array(vec![]))
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}
