use crate::tabs::Tab;
use crate::timeline::Sender;
use serde::{Deserialize, Serialize};

/// Closed set of user-generated actions plus the responder's
/// completion event. Every state transition in the widget happens by
/// dispatching exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "command")]
pub enum Command {
    ActivateTab { tab: Tab },
    SendMessage { tab: Tab, text: String },
    VerifyBooking { candidate: String },
    /// Queued by the responder when a simulated reply's delay elapses.
    DeliverResponse { tab: Tab },
}

/// Discrete, ordered render events. Surfaces consume these as pure
/// projections of store mutations; they carry everything needed to
/// draw without reading the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum RenderEvent {
    TabActivated { tab: Tab },
    MessageAppended { tab: Tab, sender: Sender, text: String },
    TypingStarted { tab: Tab },
    TypingCleared { tab: Tab },
    BookingVerified { booking_id: String },
    BookingRejected,
    ErrorBannerCleared,
}
